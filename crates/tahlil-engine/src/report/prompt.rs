//! Prompt construction for the narrative collaborator
//!
//! Every indicator is rendered into a fixed-structure template, together
//! with qualitative hints (overbought/oversold, price vs moving average)
//! computed locally. The collaborator interprets; it never computes.

use crate::config::ReportLanguage;
use crate::indicators::IndicatorSet;

/// Render an optional indicator value with an explicit placeholder
pub(crate) fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Qualitative RSI annotation (overbought above 70, oversold below 30)
pub(crate) fn rsi_hint(rsi: Option<f64>, language: ReportLanguage) -> &'static str {
    let Some(rsi) = rsi else { return "" };
    match language {
        ReportLanguage::Arabic => {
            if rsi > 70.0 {
                "(ذروة شراء)"
            } else if rsi < 30.0 {
                "(ذروة بيع)"
            } else if rsi > 50.0 {
                "(إيجابي)"
            } else {
                "(سلبي)"
            }
        }
        ReportLanguage::English => {
            if rsi > 70.0 {
                "(overbought)"
            } else if rsi < 30.0 {
                "(oversold)"
            } else if rsi > 50.0 {
                "(positive)"
            } else {
                "(negative)"
            }
        }
    }
}

/// Qualitative MFI annotation (thresholds 80/20)
pub(crate) fn mfi_hint(mfi: Option<f64>, language: ReportLanguage) -> &'static str {
    let Some(mfi) = mfi else { return "" };
    match language {
        ReportLanguage::Arabic => {
            if mfi > 80.0 {
                "(تدفق مالي مرتفع جداً)"
            } else if mfi < 20.0 {
                "(تدفق مالي منخفض جداً)"
            } else if mfi > 50.0 {
                "(تدفق مالي إيجابي)"
            } else {
                "(تدفق مالي سلبي)"
            }
        }
        ReportLanguage::English => {
            if mfi > 80.0 {
                "(very high money flow)"
            } else if mfi < 20.0 {
                "(very low money flow)"
            } else if mfi > 50.0 {
                "(positive money flow)"
            } else {
                "(negative money flow)"
            }
        }
    }
}

fn histogram_hint(histogram: Option<f64>, language: ReportLanguage) -> &'static str {
    let Some(histogram) = histogram else { return "" };
    match (language, histogram > 0.0) {
        (ReportLanguage::Arabic, true) => "(إيجابي)",
        (ReportLanguage::Arabic, false) => "(سلبي)",
        (ReportLanguage::English, true) => "(positive)",
        (ReportLanguage::English, false) => "(negative)",
    }
}

/// Where the price sits relative to a moving average
fn position_hint(price: f64, average: Option<f64>, language: ReportLanguage) -> &'static str {
    match (language, average) {
        (ReportLanguage::Arabic, Some(avg)) => {
            if price > avg {
                "فوق"
            } else {
                "تحت"
            }
        }
        (ReportLanguage::Arabic, None) => "غير متاح",
        (ReportLanguage::English, Some(avg)) => {
            if price > avg {
                "above"
            } else {
                "below"
            }
        }
        (ReportLanguage::English, None) => "not available",
    }
}

/// Build the full analysis prompt for one security
pub(crate) fn build_prompt(
    symbol: &str,
    local_name: &str,
    indicators: &IndicatorSet,
    language: ReportLanguage,
) -> String {
    match language {
        ReportLanguage::Arabic => arabic_prompt(symbol, local_name, indicators),
        ReportLanguage::English => english_prompt(symbol, local_name, indicators),
    }
}

fn arabic_prompt(symbol: &str, local_name: &str, ind: &IndicatorSet) -> String {
    let ma = &ind.moving_averages;
    let pp = &ind.pivot_points;
    let lang = ReportLanguage::Arabic;

    format!(
        r#"أنت محلل مالي فني محترف متخصص في البورصة المصرية.
قم بتحليل سهم "{local_name}" ({symbol}) بناءً على المؤشرات الفنية التالية:

**معلومات السعر:**
- السعر الحالي: {current} جنيه
- الإغلاق السابق: {previous} جنيه
- التغير: {change} ({change_percent}%)

**مؤشرات الزخم:**
- RSI (14): {rsi} {rsi_hint}
- MFI (14): {mfi} {mfi_hint}
- Stochastic K: {stoch_k}, D: {stoch_d}
- CCI (20): {cci}

**مؤشرات الاتجاه:**
- MACD: {macd}
- Signal: {signal}
- Histogram: {histogram} {histogram_hint}
- ATR (14): {atr}

**المتوسطات المتحركة:**
- SMA 10: {sma10}
- SMA 20: {sma20}
- SMA 50: {sma50}
- SMA 100: {sma100}
- SMA 200: {sma200}
- EMA 10: {ema10}
- EMA 20: {ema20}
- EMA 50: {ema50}
- EMA 100: {ema100}
- EMA 200: {ema200}
- السعر {vs_sma50} متوسط 50 يوم
- السعر {vs_sma200} متوسط 200 يوم

**مستويات الدعم والمقاومة (Pivot Points):**
- Pivot Point: {pp}
- مقاومة 1 (R1): {r1}
- مقاومة 2 (R2): {r2}
- دعم 1 (S1): {s1}
- دعم 2 (S2): {s2}

---

**المطلوب:**
قدم تحليلاً شاملاً يتضمن:

1. **تحليل الاتجاه**: هل السهم في اتجاه صاعد أم هابط أم عرضي؟ (بناءً على المتوسطات)

2. **تحليل الزخم**: هل الزخم قوي أم ضعيف؟ هل هناك إشارات ذروة شراء أو بيع؟

3. **مستويات الدعم والمقاومة**: أين مستويات الدخول والخروج المناسبة؟

4. **التوصية النهائية**:
   - اختر واحدة: شراء (BUY) / بيع (SELL) / انتظار (HOLD)
   - مستوى الثقة: عالي / متوسط / منخفض
   - **تقييم المخاطر**

**ملاحظة مهمة:** كن واقعياً ومحافظاً في توصياتك. لا تنصح بالشراء إلا إذا كانت المؤشرات واضحة.

ابدأ ردك بـ:
[RECOMMENDATION: BUY/SELL/HOLD]
[CONFIDENCE: HIGH/MEDIUM/LOW]

ثم اكتب التحليل بشكل مفصل.
"#,
        current = ind.current_price,
        previous = ind.previous_close,
        change = ind.price_change,
        change_percent = fmt_value(ind.price_change_percent),
        rsi = fmt_value(ind.rsi),
        rsi_hint = rsi_hint(ind.rsi, lang),
        mfi = fmt_value(ind.mfi),
        mfi_hint = mfi_hint(ind.mfi, lang),
        stoch_k = fmt_value(ind.stochastic.k),
        stoch_d = fmt_value(ind.stochastic.d),
        cci = fmt_value(ind.cci),
        macd = fmt_value(ind.macd.macd),
        signal = fmt_value(ind.macd.signal),
        histogram = fmt_value(ind.macd.histogram),
        histogram_hint = histogram_hint(ind.macd.histogram, lang),
        atr = fmt_value(ind.atr),
        sma10 = fmt_value(ma.sma10),
        sma20 = fmt_value(ma.sma20),
        sma50 = fmt_value(ma.sma50),
        sma100 = fmt_value(ma.sma100),
        sma200 = fmt_value(ma.sma200),
        ema10 = fmt_value(ma.ema10),
        ema20 = fmt_value(ma.ema20),
        ema50 = fmt_value(ma.ema50),
        ema100 = fmt_value(ma.ema100),
        ema200 = fmt_value(ma.ema200),
        vs_sma50 = position_hint(ind.current_price, ma.sma50, lang),
        vs_sma200 = position_hint(ind.current_price, ma.sma200, lang),
        pp = pp.pp,
        r1 = pp.r1,
        r2 = pp.r2,
        s1 = pp.s1,
        s2 = pp.s2,
    )
}

fn english_prompt(symbol: &str, local_name: &str, ind: &IndicatorSet) -> String {
    let ma = &ind.moving_averages;
    let pp = &ind.pivot_points;
    let lang = ReportLanguage::English;

    format!(
        r#"You are a professional technical analyst specializing in the Egyptian stock exchange.
Analyze the stock "{local_name}" ({symbol}) using the following technical indicators:

**Price information:**
- Current price: {current} EGP
- Previous close: {previous} EGP
- Change: {change} ({change_percent}%)

**Momentum indicators:**
- RSI (14): {rsi} {rsi_hint}
- MFI (14): {mfi} {mfi_hint}
- Stochastic K: {stoch_k}, D: {stoch_d}
- CCI (20): {cci}

**Trend indicators:**
- MACD: {macd}
- Signal: {signal}
- Histogram: {histogram} {histogram_hint}
- ATR (14): {atr}

**Moving averages:**
- SMA 10: {sma10}
- SMA 20: {sma20}
- SMA 50: {sma50}
- SMA 100: {sma100}
- SMA 200: {sma200}
- EMA 10: {ema10}
- EMA 20: {ema20}
- EMA 50: {ema50}
- EMA 100: {ema100}
- EMA 200: {ema200}
- Price is {vs_sma50} the 50-period average
- Price is {vs_sma200} the 200-period average

**Support and resistance (Pivot Points):**
- Pivot Point: {pp}
- Resistance 1 (R1): {r1}
- Resistance 2 (R2): {r2}
- Support 1 (S1): {s1}
- Support 2 (S2): {s2}

---

Provide a comprehensive analysis covering:

1. **Trend Analysis**: is the stock trending up, down, or sideways? (based on the moving averages)

2. **Momentum Analysis**: is momentum strong or weak? Any overbought or oversold signals?

3. **Support and Resistance**: where are the appropriate entry and exit levels?

4. **Final recommendation**:
   - Pick one: BUY / SELL / HOLD
   - Confidence level: HIGH / MEDIUM / LOW
   - **Risk Assessment**

**Important:** be realistic and conservative. Only recommend buying when the indicators are clear.

Start your reply with:
[RECOMMENDATION: BUY/SELL/HOLD]
[CONFIDENCE: HIGH/MEDIUM/LOW]

Then write the detailed analysis.
"#,
        current = ind.current_price,
        previous = ind.previous_close,
        change = ind.price_change,
        change_percent = fmt_value(ind.price_change_percent),
        rsi = fmt_value(ind.rsi),
        rsi_hint = rsi_hint(ind.rsi, lang),
        mfi = fmt_value(ind.mfi),
        mfi_hint = mfi_hint(ind.mfi, lang),
        stoch_k = fmt_value(ind.stochastic.k),
        stoch_d = fmt_value(ind.stochastic.d),
        cci = fmt_value(ind.cci),
        macd = fmt_value(ind.macd.macd),
        signal = fmt_value(ind.macd.signal),
        histogram = fmt_value(ind.macd.histogram),
        histogram_hint = histogram_hint(ind.macd.histogram, lang),
        atr = fmt_value(ind.atr),
        sma10 = fmt_value(ma.sma10),
        sma20 = fmt_value(ma.sma20),
        sma50 = fmt_value(ma.sma50),
        sma100 = fmt_value(ma.sma100),
        sma200 = fmt_value(ma.sma200),
        ema10 = fmt_value(ma.ema10),
        ema20 = fmt_value(ma.ema20),
        ema50 = fmt_value(ma.ema50),
        ema100 = fmt_value(ma.ema100),
        ema200 = fmt_value(ma.ema200),
        vs_sma50 = position_hint(ind.current_price, ma.sma50, lang),
        vs_sma200 = position_hint(ind.current_price, ma.sma200, lang),
        pp = pp.pp,
        r1 = pp.r1,
        r2 = pp.r2,
        s1 = pp.s1,
        s2 = pp.s2,
    )
}
