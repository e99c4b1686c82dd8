//! Security catalog: static reference data for the Egyptian exchange
//!
//! EGX30 constituents plus commonly traded stocks. Each entry carries the
//! exchange ticker (Cairo listings end in `.CA`), English and Arabic
//! names, and keywords for fuzzy search. The catalog is built once at
//! startup and passed by reference into the resolver; it is never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// A known security with bilingual names and search keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    /// Canonical exchange ticker (e.g., "FWRY.CA")
    pub symbol: String,
    /// English name
    pub name: String,
    /// Arabic name
    pub local_name: String,
    /// Keywords for fuzzy matching
    pub keywords: Vec<String>,
}

/// Immutable collection of known securities
#[derive(Debug, Clone)]
pub struct SecurityCatalog {
    securities: Vec<Security>,
}

impl SecurityCatalog {
    /// Build the catalog of EGX30 and popular Egyptian stocks
    pub fn egx() -> Self {
        let securities = EGX_SECURITIES
            .iter()
            .map(|(symbol, name, local_name, keywords)| Security {
                symbol: (*symbol).to_string(),
                name: (*name).to_string(),
                local_name: (*local_name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();

        Self { securities }
    }

    /// Build a catalog from an arbitrary list of securities
    pub fn new(securities: Vec<Security>) -> Self {
        Self { securities }
    }

    /// Iterate over all securities
    pub fn iter(&self) -> impl Iterator<Item = &Security> {
        self.securities.iter()
    }

    /// Number of securities in the catalog
    pub fn len(&self) -> usize {
        self.securities.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }

    /// Case-insensitive exact symbol lookup
    pub fn find_symbol(&self, symbol: &str) -> Option<&Security> {
        self.securities
            .iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(symbol))
    }
}

type SecurityRow = (&'static str, &'static str, &'static str, &'static [&'static str]);

/// EGX30 and popular Egyptian stocks, grouped by sector
const EGX_SECURITIES: &[SecurityRow] = &[
    // Banking
    (
        "COMI.CA",
        "Commercial International Bank",
        "البنك التجاري الدولي",
        &["cib", "commercial", "international", "bank", "تجاري", "دولي", "بنك"],
    ),
    (
        "QNBA.CA",
        "Qatar National Bank Alahli",
        "بنك قطر الوطني الأهلي",
        &["qnb", "qatar", "national", "ahli", "قطر", "وطني", "أهلي"],
    ),
    (
        "ADIB.CA",
        "Abu Dhabi Islamic Bank Egypt",
        "مصرف أبوظبي الإسلامي مصر",
        &["adib", "abu dhabi", "islamic", "أبوظبي", "إسلامي"],
    ),
    (
        "CIEB.CA",
        "Credit Agricole Egypt",
        "كريدي أجريكول مصر",
        &["credit", "agricole", "كريدي"],
    ),
    (
        "HDBK.CA",
        "Housing and Development Bank",
        "بنك التعمير والإسكان",
        &["hdb", "housing", "development", "تعمير", "إسكان"],
    ),
    (
        "SAUD.CA",
        "Faisal Islamic Bank of Egypt",
        "بنك فيصل الإسلامي المصري",
        &["faisal", "islamic", "فيصل", "إسلامي"],
    ),
    (
        "CANA.CA",
        "Suez Canal Bank",
        "بنك قناة السويس",
        &["suez", "canal", "قناة", "سويس"],
    ),
    (
        "EXPA.CA",
        "Export Development Bank of Egypt",
        "البنك المصري لتنمية الصادرات",
        &["export", "development", "صادرات", "تنمية"],
    ),
    // Telecommunications & technology
    (
        "ETEL.CA",
        "Telecom Egypt",
        "المصرية للاتصالات",
        &["telecom", "egypt", "te", "اتصالات", "مصرية", "وي", "we"],
    ),
    (
        "FWRY.CA",
        "Fawry",
        "فوري",
        &["fawry", "فوري", "fintech", "دفع"],
    ),
    (
        "EFIH.CA",
        "e-Finance",
        "إي فاينانس",
        &["efinance", "e-finance", "اي فاينانس", "مالية"],
    ),
    ("RAYA.CA", "Raya Holding", "راية القابضة", &["raya", "راية"]),
    // Real estate
    (
        "TMGH.CA",
        "Talaat Moustafa Group",
        "مجموعة طلعت مصطفى",
        &["tmg", "talaat", "moustafa", "طلعت", "مصطفى", "مدينتي"],
    ),
    (
        "PHDC.CA",
        "Palm Hills Development",
        "بالم هيلز للتعمير",
        &["palm", "hills", "بالم", "هيلز"],
    ),
    (
        "MNHD.CA",
        "Madinet Nasr Housing",
        "مدينة نصر للإسكان",
        &["madinet", "nasr", "housing", "مدينة", "نصر", "إسكان"],
    ),
    (
        "OCDI.CA",
        "Orascom Development",
        "أوراسكوم للتنمية",
        &["orascom", "development", "أوراسكوم", "تنمية", "الجونة"],
    ),
    ("SODIC.CA", "SODIC", "سوديك", &["sodic", "سوديك"]),
    (
        "HELI.CA",
        "Heliopolis Company for Housing",
        "هليوبوليس للإسكان",
        &["heliopolis", "هليوبوليس"],
    ),
    (
        "EMFD.CA",
        "Emaar Misr",
        "إعمار مصر",
        &["emaar", "misr", "إعمار"],
    ),
    (
        "HRHO.CA",
        "EFG Hermes",
        "المجموعة المالية هيرميس",
        &["hermes", "efg", "هيرميس", "مجموعة مالية"],
    ),
    (
        "UNIT.CA",
        "United Housing & Development",
        "المتحدة للإسكان والتعمير",
        &["united", "housing", "متحدة", "إسكان"],
    ),
    (
        "ZMID.CA",
        "Zahraa Maadi Investment",
        "زهراء المعادي للاستثمار",
        &["zahraa", "maadi", "زهراء", "معادي"],
    ),
    (
        "ELKA.CA",
        "El Kahera Housing",
        "القاهرة للإسكان",
        &["kahera", "cairo", "housing", "قاهرة", "إسكان"],
    ),
    // Food & beverages
    (
        "EAST.CA",
        "Eastern Company",
        "الشرقية للدخان",
        &["eastern", "tobacco", "شرقية", "دخان", "سجائر"],
    ),
    (
        "JUFO.CA",
        "Juhayna Food Industries",
        "جهينة للصناعات الغذائية",
        &["juhayna", "food", "جهينة", "ألبان"],
    ),
    (
        "DCRC.CA",
        "Delta Sugar Company",
        "دلتا للسكر",
        &["delta", "sugar", "دلتا", "سكر"],
    ),
    (
        "DOMTY.CA",
        "Arabian Food Industries (Domty)",
        "دومتي",
        &["domty", "arabian", "food", "دومتي", "جبنة"],
    ),
    (
        "EFID.CA",
        "Edita Food Industries",
        "إيديتا للصناعات الغذائية",
        &["edita", "food", "molto", "إيديتا", "مولتو"],
    ),
    (
        "OLFI.CA",
        "Obour Land",
        "عبور لاند",
        &["obour", "land", "cheese", "عبور", "لاند"],
    ),
    (
        "ISMA.CA",
        "Ismailia Misr Poultry",
        "الإسماعيلية مصر للدواجن",
        &["ismailia", "poultry", "إسماعيلية", "دواجن"],
    ),
    // Industrial & materials
    (
        "ESRS.CA",
        "Ezz Steel",
        "حديد عز",
        &["ezz", "steel", "عز", "حديد"],
    ),
    (
        "SWDY.CA",
        "Elsewedy Electric",
        "السويدي إلكتريك",
        &["elsewedy", "sewedy", "electric", "سويدي", "كابلات"],
    ),
    (
        "ABUK.CA",
        "Abu Qir Fertilizers",
        "أبو قير للأسمدة",
        &["abu", "kir", "fertilizers", "أبو قير", "أسمدة"],
    ),
    (
        "MOPCO.CA",
        "Misr Fertilizers Production",
        "موبكو",
        &["mopco", "fertilizers", "موبكو", "أسمدة"],
    ),
    (
        "SKPC.CA",
        "Sidi Kerir Petrochemicals",
        "سيدي كرير للبتروكيماويات",
        &["sidpec", "sidi", "kerir", "سيدي", "كرير", "بتروكيماويات"],
    ),
    (
        "KIMA.CA",
        "Kima",
        "كيما",
        &["kima", "chemical", "كيما", "أسمدة"],
    ),
    (
        "AMOC.CA",
        "Alexandria Mineral Oils",
        "أموك",
        &["amoc", "alexandria", "mineral", "oils", "أموك", "زيوت"],
    ),
    (
        "EGAL.CA",
        "Egypt Aluminum",
        "مصر للألومنيوم",
        &["egypt", "aluminum", "egyptalum", "ألومنيوم", "ايجيبت ألومنيوم"],
    ),
    (
        "EGCH.CA",
        "Chemical Industries Development",
        "تنمية الصناعات الكيماوية",
        &["cid", "chemical", "كيماوية"],
    ),
    (
        "MCQE.CA",
        "Misr Cement Qena",
        "مصر للأسمنت قنا",
        &["cement", "qena", "أسمنت", "قنا"],
    ),
    (
        "ARCC.CA",
        "Arabian Cement",
        "الأسمنت العربية",
        &["arabian", "cement", "أسمنت", "عربية"],
    ),
    // Healthcare & pharma
    (
        "ISPH.CA",
        "Integrated Diagnostics Holdings",
        "المتكاملة للتشخيصات",
        &["idh", "diagnostics", "البرج", "معامل", "تحاليل"],
    ),
    (
        "CLHO.CA",
        "Cleopatra Hospital",
        "مستشفى كليوباترا",
        &["cleopatra", "hospital", "كليوباترا", "مستشفى"],
    ),
    (
        "PHAR.CA",
        "EIPICO",
        "إيبيكو",
        &["eipico", "pharma", "إيبيكو", "أدوية"],
    ),
    (
        "RMDA.CA",
        "Rameda",
        "راميدا",
        &["rameda", "pharma", "راميدا", "أدوية"],
    ),
    // Financial services (non-banking)
    (
        "CCAP.CA",
        "Qalaa Holdings",
        "القلعة للاستشارات المالية",
        &["qalaa", "citadel", "قلعة"],
    ),
    (
        "BTFH.CA",
        "Beltone Financial",
        "بلتون المالية",
        &["beltone", "بلتون"],
    ),
    (
        "CICH.CA",
        "CI Capital",
        "سي أي كابيتال",
        &["ci", "capital", "سي", "أيس"],
    ),
    (
        "PRDC.CA",
        "Pioneers Properties",
        "بايونيرز بروبرتيز",
        &["pioneers", "properties", "بايونيرز"],
    ),
    (
        "ASPI.CA",
        "Aspire Capital",
        "أسباير كابيتال",
        &["aspire", "capital", "أسباير", "رواد"],
    ),
    (
        "BINV.CA",
        "B Investments",
        "بي إنفستمنتس",
        &["b", "investments", "بي", "استثمار"],
    ),
    // Shipping, transport & auto
    (
        "ALCN.CA",
        "Alexandria Containers",
        "الإسكندرية للحاويات",
        &["alexandria", "containers", "حاويات", "إسكندرية"],
    ),
    (
        "ETRS.CA",
        "Egytrans",
        "إيجيترانس",
        &["egytrans", "transport", "إيجيترانس", "نقل"],
    ),
    (
        "GBCO.CA",
        "GB Corp",
        "جي بي كورب",
        &["gb", "auto", "ghabbour", "غبور", "سيارات"],
    ),
    // Others
    (
        "ORWE.CA",
        "Oriental Weavers",
        "النساجون الشرقيون",
        &["oriental", "weavers", "نساجون", "شرقيون", "سجاد"],
    ),
    (
        "DSCW.CA",
        "Dice Sport & Casual Wear",
        "دايس",
        &["dice", "sport", "wear", "دايس", "ملابس"],
    ),
    (
        "EKHO.CA",
        "Egyptian Kuwaiti Holding",
        "المصرية الكويتية القابضة",
        &["ekho", "egyptian", "kuwaiti", "كويتية", "قابضة"],
    ),
    (
        "ORAS.CA",
        "Orascom Construction",
        "أوراسكوم كونستراكشون",
        &["orascom", "construction", "أوراسكوم", "إنشاءات"],
    ),
    (
        "ORHD.CA",
        "Orascom Hotels",
        "أوراسكوم للفنادق",
        &["orascom", "hotels", "أوراسكوم", "فنادق"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_populated() {
        let catalog = SecurityCatalog::egx();
        assert!(catalog.len() > 50);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_symbols_are_unique_and_cairo_listed() {
        let catalog = SecurityCatalog::egx();
        let mut seen = HashSet::new();

        for security in catalog.iter() {
            assert!(
                seen.insert(security.symbol.clone()),
                "duplicate symbol: {}",
                security.symbol
            );
            assert!(
                security.symbol.ends_with(".CA"),
                "non-Cairo symbol: {}",
                security.symbol
            );
            assert!(!security.name.is_empty());
            assert!(!security.local_name.is_empty());
        }
    }

    #[test]
    fn test_find_symbol_is_case_insensitive() {
        let catalog = SecurityCatalog::egx();

        let fawry = catalog.find_symbol("fwry.ca").expect("FWRY.CA exists");
        assert_eq!(fawry.symbol, "FWRY.CA");
        assert_eq!(fawry.name, "Fawry");
        assert_eq!(fawry.local_name, "فوري");

        assert!(catalog.find_symbol("NOPE.XX").is_none());
    }
}
