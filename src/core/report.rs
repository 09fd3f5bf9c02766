use crate::domain::model::LanguageSummary;

pub const HEADER: [&str; 4] = [
    "Programming Language",
    "Vacancies Found",
    "Vacancies Processed",
    "Average Salary",
];

/// 將摘要畫成 ASCII 表格，標題嵌在上邊框；輸出不含結尾換行
pub fn render_table(title: &str, summaries: &[LanguageSummary]) -> String {
    let header: Vec<String> = HEADER.iter().map(|cell| cell.to_string()).collect();
    let rows: Vec<Vec<String>> = summaries.iter().map(summary_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths, None);
    let mut lines = vec![border(&widths, Some(title)), row_line(&header, &widths)];
    if !rows.is_empty() {
        lines.push(separator.clone());
        lines.extend(rows.iter().map(|row| row_line(row, &widths)));
    }
    lines.push(separator);

    lines.join("\n")
}

/// 缺少的欄位留白
fn summary_cells(summary: &LanguageSummary) -> Vec<String> {
    vec![
        summary.language.clone(),
        summary.vacancies_found.to_string(),
        summary.vacancies_processed.to_string(),
        summary
            .average_salary
            .map(|salary| salary.to_string())
            .unwrap_or_default(),
    ]
}

fn border(widths: &[usize], title: Option<&str>) -> String {
    let inner = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");

    let inner = match title {
        // 標題放不下時直接省略
        Some(title) if title.chars().count() <= inner.chars().count() => {
            let title_len = title.chars().count();
            let rest: String = inner.chars().skip(title_len).collect();
            format!("{}{}", title, rest)
        }
        _ => inner,
    };

    format!("+{}+", inner)
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let padded = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let fill = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(fill))
        })
        .collect::<Vec<_>>()
        .join("|");

    format!("|{}|", padded)
}
