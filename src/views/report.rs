use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

pub struct ReportRow {
    pub code: String,
    pub count: i64,
}

pub fn report(total: i64, rows: Vec<ReportRow>, locale: &str) -> Markup {
    html! {
        h1 { (t!("report.title", locale = locale)) }
        p { (t!("report.total", locale = locale)) " " strong { (total) } }

        @if total == 0 {
            p { (t!("report.empty", locale = locale)) }
        } @else {
            table {
                thead {
                    tr {
                        th { (t!("report.code", locale = locale)) }
                        th { (t!("report.count", locale = locale)) }
                        th { (t!("report.share", locale = locale)) }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td {
                                a href=(names::skin_type_anchor(&row.code)) { (row.code) }
                            }
                            td { (row.count) }
                            td { (format!("{:.1}%", row.count as f64 * 100.0 / total as f64)) }
                        }
                    }
                }
            }
        }
    }
}
