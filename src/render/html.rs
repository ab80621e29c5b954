//! HTML Dashboard Renderer
//!
//! Emits the evaluation as a single self-contained HTML document: ranked
//! vendor score cards, one comparison-table tab per category, and a
//! methodology section. All data is embedded as static markup; the only
//! script is the tab switcher and the row expander.

use std::io::Write;

use chrono::Local;

use crate::catalog::Catalog;
use crate::error::ReportError;
use crate::render::ranked_vendors;
use crate::types::{Category, Criterion, Evaluation, Priority};
use crate::value::percent_value;

/// Maximum characters of a criterion name shown in a table row before
/// truncation; the full description lives in the expandable details.
const NAME_DISPLAY_LIMIT: usize = 50;

/// Render the full dashboard document.
pub(crate) fn render<W: Write>(
    evaluation: &Evaluation,
    catalog: &Catalog,
    writer: &mut W,
) -> Result<(), ReportError> {
    let vendor_count = catalog.vendor_count();

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"uk\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(writer, "    <title>AI Copilot - Аналіз провайдерів</title>")?;
    writeln!(writer, "    <style>{}</style>", STYLE)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "    <div class=\"container\">")?;

    render_header(writer, vendor_count)?;
    render_tab_bar(evaluation, catalog, writer)?;
    render_overall_tab(evaluation, catalog, writer)?;

    for spec_id in catalog.categories.iter().map(|c| c.id.as_str()) {
        if let Some(category) = evaluation.category(spec_id) {
            render_category_tab(category, catalog, writer)?;
        }
    }

    writeln!(writer, "    </div>")?;
    writeln!(writer, "    <script>{}</script>", SCRIPT)?;
    writeln!(
        writer,
        "    <!-- generated {} -->",
        Local::now().format("%Y-%m-%d")
    )?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    writer.flush()?;

    Ok(())
}

/// Page header: tag line, title, subtitle and the two legends.
fn render_header<W: Write>(writer: &mut W, vendor_count: usize) -> Result<(), ReportError> {
    writeln!(writer, "        <header>")?;
    writeln!(
        writer,
        "            <div class=\"header-tag\">R&amp;D • ОЦІНКА ПРОВАЙДЕРІВ</div>"
    )?;
    writeln!(
        writer,
        "            <h1>AI Copilot<br>Аналіз провайдерів</h1>"
    )?;
    writeln!(
        writer,
        "            <p class=\"subtitle\">Порівняльна оцінка {} провайдерів за методологією MSCW. \
         Вага критеріїв відповідає пріоритетам запуску контакт-центру.</p>",
        vendor_count
    )?;
    writeln!(writer, "            <div class=\"legend\">")?;
    for (class, text) in [
        ("enterprise", "80-100% — Enterprise-ready"),
        ("needs-config", "60-79% — Потребує налаштувань"),
        ("incomplete", "&lt;60% — Нішевий / не повноцінний"),
        ("must", "Must"),
        ("should", "Should"),
        ("could", "Could"),
    ] {
        writeln!(writer, "                <div class=\"legend-item\">")?;
        writeln!(
            writer,
            "                    <div class=\"legend-dot {}\"></div>",
            class
        )?;
        writeln!(writer, "                    <span>{}</span>", text)?;
        writeln!(writer, "                </div>")?;
    }
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </header>")?;
    Ok(())
}

/// Tab bar: the overall ranking plus one tab per extracted category, in
/// catalog order.
fn render_tab_bar<W: Write>(
    evaluation: &Evaluation,
    catalog: &Catalog,
    writer: &mut W,
) -> Result<(), ReportError> {
    writeln!(writer, "        <div class=\"tabs\">")?;
    writeln!(
        writer,
        "            <button class=\"tab active\" data-tab=\"overall\">Загальний рейтинг</button>"
    )?;
    for spec in &catalog.categories {
        if let Some(category) = evaluation.category(&spec.id) {
            writeln!(
                writer,
                "            <button class=\"tab\" data-tab=\"{}\">{} ({}%)</button>",
                category.id,
                escape_html(&category.name),
                format_number(category.weight_percent)
            )?;
        }
    }
    writeln!(writer, "        </div>")?;
    Ok(())
}

/// Overall tab: ranked vendor score cards and the methodology section.
fn render_overall_tab<W: Write>(
    evaluation: &Evaluation,
    catalog: &Catalog,
    writer: &mut W,
) -> Result<(), ReportError> {
    writeln!(
        writer,
        "        <div class=\"tab-content active\" data-content=\"overall\">"
    )?;
    writeln!(writer, "            <div class=\"summary-section\">")?;
    writeln!(
        writer,
        "                <h3 class=\"summary-title\">Підсумкові оцінки</h3>"
    )?;
    writeln!(writer, "                <div class=\"final-scores\">")?;

    for (rank, vendor) in ranked_vendors(evaluation, catalog).iter().enumerate() {
        render_vendor_card(evaluation, catalog, &vendor.id, rank + 1, writer)?;
    }

    writeln!(writer, "                </div>")?;
    writeln!(writer, "            </div>")?;
    render_methodology(writer)?;
    writeln!(writer, "        </div>")?;
    Ok(())
}

/// One ranked vendor card with its per-category breakdown bars.
fn render_vendor_card<W: Write>(
    evaluation: &Evaluation,
    catalog: &Catalog,
    vendor_id: &str,
    rank: usize,
    writer: &mut W,
) -> Result<(), ReportError> {
    let (badge, extra) = match rank {
        1 => ("🥇 #1".to_string(), " top top-1"),
        2 => ("🥈 #2".to_string(), " top top-2"),
        3 => ("🥉 #3".to_string(), " top top-3"),
        n => (format!("#{}", n), ""),
    };
    let rank_style = if rank > 3 { " style=\"opacity: 0.5;\"" } else { "" };

    let score = evaluation
        .final_scores
        .get(vendor_id)
        .cloned()
        .unwrap_or_else(|| "0%".to_string());
    let cost = evaluation
        .cost_estimates
        .get(vendor_id)
        .cloned()
        .unwrap_or_else(|| "N/A".to_string());

    writeln!(
        writer,
        "                    <div class=\"provider-score-card{}\">",
        extra
    )?;
    writeln!(
        writer,
        "                        <div class=\"rank-badge\"{}>{}</div>",
        rank_style, badge
    )?;
    writeln!(
        writer,
        "                        <h4>{}</h4>",
        escape_html(vendor_id)
    )?;
    writeln!(
        writer,
        "                        <div class=\"tco\">~${}</div>",
        escape_html(&cost)
    )?;
    writeln!(
        writer,
        "                        <div class=\"score-value\">{}<span class=\"score-unit\">%</span></div>",
        escape_html(score.trim_end_matches('%'))
    )?;
    writeln!(
        writer,
        "                        <div class=\"score-label\">Підсумковий бал</div>"
    )?;

    writeln!(writer, "                        <div class=\"breakdown\">")?;
    for spec in &catalog.categories {
        let Some(category) = evaluation.category(&spec.id) else {
            continue;
        };
        let subtotal = category
            .subtotals
            .get(vendor_id)
            .cloned()
            .unwrap_or_else(|| "0%".to_string());
        let fill = if category.weight_percent > 0.0 {
            percent_value(&subtotal) / category.weight_percent * 100.0
        } else {
            0.0
        };
        writeln!(
            writer,
            "                            <div class=\"breakdown-item\">"
        )?;
        writeln!(
            writer,
            "                                <span class=\"breakdown-label\">{}</span>",
            escape_html(&category.name)
        )?;
        writeln!(
            writer,
            "                                <div class=\"breakdown-bar\"><div class=\"breakdown-fill {}\" style=\"width: {:.1}%;\"></div></div>",
            category.id, fill
        )?;
        writeln!(
            writer,
            "                                <span class=\"breakdown-value\">{}</span>",
            escape_html(&subtotal)
        )?;
        writeln!(writer, "                            </div>")?;
    }
    writeln!(writer, "                        </div>")?;
    writeln!(writer, "                    </div>")?;
    Ok(())
}

/// One category tab: comparison table plus the subtotal summary cards.
fn render_category_tab<W: Write>(
    category: &Category,
    catalog: &Catalog,
    writer: &mut W,
) -> Result<(), ReportError> {
    let columns = catalog.vendor_count();

    writeln!(
        writer,
        "        <div class=\"tab-content\" data-content=\"{}\">",
        category.id
    )?;
    writeln!(writer, "            <div class=\"summary-section\">")?;
    writeln!(
        writer,
        "                <h3 class=\"summary-title\">{} ({}%) - Оцінка провайдерів</h3>",
        escape_html(&category.name),
        format_number(category.weight_percent)
    )?;
    writeln!(writer, "                <div class=\"comparison-table\">")?;

    // Table header: criterion column plus one column per vendor.
    writeln!(
        writer,
        "                    <div class=\"table-header\" style=\"grid-template-columns: 250px repeat({}, 1fr);\">",
        columns
    )?;
    writeln!(writer, "                        <div>Критерій</div>")?;
    for vendor in &catalog.vendors {
        // Labels may carry intentional <br> breaks; emitted verbatim.
        writeln!(
            writer,
            "                        <div class=\"provider-column\">{}</div>",
            vendor.label
        )?;
    }
    writeln!(writer, "                    </div>")?;

    for criterion in &category.criteria {
        render_criterion_row(criterion, catalog, columns, writer)?;
    }

    writeln!(writer, "                </div>")?;

    // Subtotal summary cards.
    writeln!(writer, "                <div class=\"summary-grid\">")?;
    for vendor in &catalog.vendors {
        let subtotal = category
            .subtotals
            .get(&vendor.id)
            .cloned()
            .unwrap_or_else(|| "0%".to_string());
        writeln!(writer, "                    <div class=\"summary-card\">")?;
        writeln!(
            writer,
            "                        <h5>{}</h5>",
            escape_html(&vendor.id)
        )?;
        writeln!(
            writer,
            "                        <div class=\"value\">{}</div>",
            escape_html(&subtotal)
        )?;
        writeln!(writer, "                    </div>")?;
    }
    writeln!(writer, "                </div>")?;
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </div>")?;
    Ok(())
}

/// One criterion row: priority badge, truncated name, score chips and the
/// expandable full description.
fn render_criterion_row<W: Write>(
    criterion: &Criterion,
    catalog: &Catalog,
    columns: usize,
    writer: &mut W,
) -> Result<(), ReportError> {
    let (badge_class, badge_letter) = priority_badge(criterion.priority);

    writeln!(
        writer,
        "                    <div class=\"criteria-row\" onclick=\"toggleExpand(this)\" style=\"grid-template-columns: 250px repeat({}, 1fr);\">",
        columns
    )?;
    writeln!(writer, "                        <div class=\"criteria-name\">")?;
    writeln!(
        writer,
        "                            <span class=\"priority-badge {}\">{}</span>",
        badge_class, badge_letter
    )?;
    writeln!(
        writer,
        "                            {}",
        escape_html(&truncate(&criterion.name, NAME_DISPLAY_LIMIT))
    )?;
    writeln!(writer, "                        </div>")?;

    for vendor in &catalog.vendors {
        let score = criterion.scores.get(&vendor.id).copied().unwrap_or(0.0);
        writeln!(
            writer,
            "                        <div class=\"score-cell\"><div class=\"score {}\">{}</div></div>",
            score_class(score),
            format_number(score)
        )?;
    }

    writeln!(writer, "                        <div class=\"expand-details\">")?;
    writeln!(writer, "                            <h4>Деталі оцінки</h4>")?;
    writeln!(
        writer,
        "                            <p>{}</p>",
        escape_html(&criterion.description)
    )?;
    writeln!(writer, "                        </div>")?;
    writeln!(writer, "                    </div>")?;
    Ok(())
}

/// Methodology section shown under the overall tab.
fn render_methodology<W: Write>(writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "            <div class=\"methodology\">")?;
    writeln!(writer, "                <h3>Методологія аналізу</h3>")?;
    writeln!(writer, "                <div class=\"methodology-list\">")?;
    for (icon, title, text) in [
        (
            "📊",
            "Пріоритезація за MSCW",
            "Must — обов'язкові для запуску, Should — необхідні для розвитку, Could — чудово було б мати",
        ),
        (
            "⚖️",
            "Розподіл пріоритетів (Weight%)",
            "Кожній характеристиці присвоєно вагу залежно від її критичності",
        ),
        (
            "🎯",
            "Підсумковий відсоток",
            "Сума виконання кожної окремої вимоги відносно її ідеального втілення",
        ),
        (
            "📈",
            "Легенда значення оцінки",
            "5 — готове найкраще рішення | 4/4.5 — хороше рішення | 3/3.5 — потребує налаштувань | 1/2/2.5 — не відповідає",
        ),
    ] {
        writeln!(writer, "                    <div class=\"methodology-item\">")?;
        writeln!(
            writer,
            "                        <div class=\"icon\">{}</div>",
            icon
        )?;
        writeln!(writer, "                        <div class=\"content\">")?;
        writeln!(writer, "                            <h4>{}</h4>", title)?;
        writeln!(
            writer,
            "                            <p>{}</p>",
            escape_html(text)
        )?;
        writeln!(writer, "                        </div>")?;
        writeln!(writer, "                    </div>")?;
    }
    writeln!(writer, "                </div>")?;
    writeln!(writer, "            </div>")?;
    Ok(())
}

/// CSS class of a score chip by its value band.
fn score_class(score: f64) -> &'static str {
    if score >= 5.0 {
        "s5"
    } else if score >= 4.0 {
        "s4"
    } else if score >= 3.0 {
        "s3"
    } else if score >= 2.0 {
        "s2"
    } else {
        "s1"
    }
}

/// Badge class and letter of a priority.
fn priority_badge(priority: Priority) -> (&'static str, &'static str) {
    match priority {
        Priority::Must => ("must", "M"),
        Priority::Should => ("should", "S"),
        Priority::Could => ("could", "C"),
    }
}

/// Whole numbers print without a fractional part ("5", not "5.0").
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Char-boundary-safe truncation with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let short: String = text.chars().take(max_chars).collect();
        format!("{}...", short)
    } else {
        text.to_string()
    }
}

/// Minimal HTML escaping for interpolated text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Embedded stylesheet. Kept as one static block so the document stays
/// self-contained.
const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: linear-gradient(135deg, #0a0e27 0%, #1a1f3a 100%);
    color: #e0e6ed;
    line-height: 1.6;
    min-height: 100vh;
    padding: 20px;
}
.container { max-width: 1400px; margin: 0 auto; }
header {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    padding: 40px;
    margin-bottom: 40px;
}
.header-tag {
    display: inline-block;
    background: rgba(59, 130, 246, 0.2);
    color: #60a5fa;
    padding: 6px 16px;
    border-radius: 20px;
    font-size: 12px;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 16px;
}
h1 {
    font-size: 48px;
    font-weight: 700;
    margin-bottom: 12px;
    background: linear-gradient(135deg, #ffffff 0%, #60a5fa 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}
.subtitle { font-size: 18px; color: #9ca3af; line-height: 1.8; max-width: 800px; }
.legend { display: flex; flex-wrap: wrap; gap: 16px; margin: 30px 0 0; }
.legend-item { display: flex; align-items: center; gap: 8px; font-size: 13px; }
.legend-dot { width: 12px; height: 12px; border-radius: 50%; }
.legend-dot.enterprise { background: #10b981; }
.legend-dot.needs-config { background: #f59e0b; }
.legend-dot.incomplete { background: #ef4444; }
.legend-dot.must { background: #ef4444; }
.legend-dot.should { background: #f59e0b; }
.legend-dot.could { background: #60a5fa; }
.tabs {
    display: flex;
    gap: 12px;
    margin-bottom: 32px;
    background: rgba(255, 255, 255, 0.03);
    padding: 12px;
    border-radius: 12px;
    overflow-x: auto;
}
.tab {
    padding: 12px 24px;
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    color: #9ca3af;
    cursor: pointer;
    transition: all 0.3s ease;
    font-size: 14px;
    font-weight: 600;
    white-space: nowrap;
}
.tab:hover { background: rgba(255, 255, 255, 0.05); border-color: rgba(255, 255, 255, 0.2); }
.tab.active { background: rgba(59, 130, 246, 0.2); border-color: #60a5fa; color: #60a5fa; }
.tab-content { display: none; }
.tab-content.active { display: block; }
.comparison-table {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    overflow: hidden;
    margin-bottom: 32px;
}
.table-header {
    display: grid;
    gap: 1px;
    background: rgba(255, 255, 255, 0.05);
    padding: 16px;
    font-weight: 600;
    font-size: 12px;
    text-align: center;
}
.provider-column { line-height: 1.3; }
.criteria-row {
    display: grid;
    gap: 1px;
    padding: 12px 16px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    align-items: center;
    cursor: pointer;
    transition: background 0.2s ease;
}
.criteria-row:hover { background: rgba(255, 255, 255, 0.03); }
.criteria-name { font-size: 13px; display: flex; align-items: center; gap: 8px; padding-right: 8px; }
.priority-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 20px;
    height: 20px;
    border-radius: 4px;
    font-size: 10px;
    font-weight: 700;
}
.priority-badge.must { background: rgba(239, 68, 68, 0.2); color: #ef4444; }
.priority-badge.should { background: rgba(245, 158, 11, 0.2); color: #f59e0b; }
.priority-badge.could { background: rgba(96, 165, 250, 0.2); color: #60a5fa; }
.score-cell { display: flex; justify-content: center; align-items: center; }
.score {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 6px;
    font-size: 12px;
    font-weight: 700;
}
.score.s5 { background: rgba(16, 185, 129, 0.2); color: #10b981; }
.score.s4 { background: rgba(34, 197, 94, 0.2); color: #22c55e; }
.score.s3 { background: rgba(245, 158, 11, 0.2); color: #f59e0b; }
.score.s2 { background: rgba(249, 115, 22, 0.2); color: #f97316; }
.score.s1 { background: rgba(239, 68, 68, 0.2); color: #ef4444; }
.expand-details {
    display: none;
    grid-column: 1 / -1;
    padding: 16px;
    background: rgba(255, 255, 255, 0.02);
    border-radius: 8px;
    margin-top: 12px;
}
.expand-details.active { display: block; }
.expand-details h4 { font-size: 14px; margin-bottom: 8px; color: #60a5fa; }
.expand-details p { font-size: 13px; color: #9ca3af; line-height: 1.6; }
.summary-section {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    padding: 32px;
    margin-bottom: 32px;
}
.summary-title { font-size: 24px; font-weight: 700; margin-bottom: 24px; color: #60a5fa; }
.summary-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 16px; }
.summary-card { background: rgba(255, 255, 255, 0.03); border-radius: 12px; padding: 16px; text-align: center; }
.summary-card h5 { font-size: 12px; color: #9ca3af; margin-bottom: 8px; font-weight: 600; }
.summary-card .value { font-size: 24px; font-weight: 700; color: #10b981; }
.final-scores { display: grid; grid-template-columns: repeat(6, 1fr); gap: 20px; }
.provider-score-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    padding: 24px;
    text-align: center;
}
.provider-score-card:hover { background: rgba(255, 255, 255, 0.05); border-color: rgba(255, 255, 255, 0.2); }
.provider-score-card.top { border-width: 2px; }
.provider-score-card.top-1 { border-color: #ffd700; background: linear-gradient(135deg, rgba(255, 215, 0, 0.1) 0%, rgba(255, 255, 255, 0.03) 100%); }
.provider-score-card.top-2 { border-color: #c0c0c0; background: linear-gradient(135deg, rgba(192, 192, 192, 0.1) 0%, rgba(255, 255, 255, 0.03) 100%); }
.provider-score-card.top-3 { border-color: #cd7f32; background: linear-gradient(135deg, rgba(205, 127, 50, 0.1) 0%, rgba(255, 255, 255, 0.03) 100%); }
.rank-badge { font-size: 14px; font-weight: 700; margin-bottom: 8px; }
.provider-score-card .tco { font-size: 11px; color: #9ca3af; margin-bottom: 8px; }
.provider-score-card h4 { font-size: 14px; font-weight: 600; margin-bottom: 12px; }
.provider-score-card .score-value { font-size: 36px; font-weight: 800; color: #10b981; margin-bottom: 4px; }
.provider-score-card.top .score-value { font-size: 42px; }
.provider-score-card.top-1 .score-value { color: #ffd700; }
.provider-score-card.top-2 .score-value { color: #c0c0c0; }
.provider-score-card.top-3 .score-value { color: #cd7f32; }
.score-unit { font-size: 24px; }
.score-label { font-size: 11px; color: #9ca3af; margin-bottom: 16px; }
.breakdown { text-align: left; padding-top: 16px; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.breakdown-item { display: flex; align-items: center; gap: 8px; margin-bottom: 8px; }
.breakdown-label { font-size: 10px; color: #9ca3af; width: 50px; }
.breakdown-bar { flex: 1; height: 6px; background: rgba(255, 255, 255, 0.1); border-radius: 3px; overflow: hidden; }
.breakdown-fill { height: 100%; border-radius: 3px; transition: width 0.3s ease; }
.breakdown-fill.copilot { background: #60a5fa; }
.breakdown-fill.acw { background: #8b5cf6; }
.breakdown-fill.analytics { background: #10b981; }
.breakdown-fill.precall { background: #f59e0b; }
.breakdown-fill.it { background: #ef4444; }
.breakdown-fill.business { background: #ec4899; }
.breakdown-value { font-size: 10px; color: #e0e6ed; width: 35px; text-align: right; }
.methodology {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    padding: 32px;
    margin-top: 32px;
}
.methodology h3 { font-size: 24px; font-weight: 700; margin-bottom: 24px; color: #60a5fa; }
.methodology-list { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
.methodology-item { display: flex; gap: 16px; padding: 20px; background: rgba(255, 255, 255, 0.02); border-radius: 12px; }
.methodology-item .icon { font-size: 24px; }
.methodology-item .content h4 { font-size: 15px; margin-bottom: 8px; }
.methodology-item .content p { font-size: 13px; color: #9ca3af; line-height: 1.5; }
@media (max-width: 1400px) { .final-scores { grid-template-columns: repeat(4, 1fr); } }
@media (max-width: 1024px) { .final-scores { grid-template-columns: repeat(3, 1fr); } }
@media (max-width: 768px) {
    h1 { font-size: 32px; }
    .tabs { flex-wrap: wrap; }
    .summary-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;

/// Tab switcher and criterion-row expander.
const SCRIPT: &str = r#"
const tabs = document.querySelectorAll('.tab');
const contents = document.querySelectorAll('.tab-content');
tabs.forEach(tab => {
    tab.addEventListener('click', () => {
        const targetTab = tab.dataset.tab;
        tabs.forEach(t => t.classList.remove('active'));
        contents.forEach(c => c.classList.remove('active'));
        tab.classList.add('active');
        document.querySelector(`[data-content="${targetTab}"]`).classList.add('active');
    });
});
function toggleExpand(row) {
    const expandDetails = row.querySelector('.expand-details');
    document.querySelectorAll('.expand-details.active').forEach(el => {
        if (el !== expandDetails) {
            el.classList.remove('active');
        }
    });
    if (expandDetails) {
        expandDetails.classList.toggle('active');
    }
}
"#;
