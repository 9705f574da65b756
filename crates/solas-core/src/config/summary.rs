//! Plain-text summary of collected answers, shown before confirmation

use super::site::SiteConfig;

const LANGUAGE_HEADERS: [&str; 6] = ["Name", "Native", "Code", "Direction", "Default", "Site Name"];

/// Render the base fields, then the additional languages table if any
pub fn render_summary(site: &SiteConfig) -> String {
    let rows = [
        ("Site name:", site.site_name.as_str()),
        ("Site code:", site.site_code.as_str()),
        ("Timezone:", site.timezone.as_str()),
        ("ISO-ALPHA2:", site.iso_country_code.as_str()),
        ("FQDN:", site.fqdn.as_str()),
        ("Homepage:", site.homepage.as_str()),
    ];

    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = label_width));
    }

    if !site.languages.is_empty() {
        let rows: Vec<[String; 6]> = site
            .languages
            .iter()
            .map(|l| {
                [
                    l.english_name.clone(),
                    l.native_name.clone(),
                    l.code.clone(),
                    l.direction.to_string(),
                    if l.is_default { "yes" } else { "no" }.to_string(),
                    l.site_name.clone(),
                ]
            })
            .collect();

        out.push('\n');
        out.push_str("Additional languages\n");
        out.push_str(&render_table(&LANGUAGE_HEADERS, &rows));
    }

    out
}

fn render_table(headers: &[&str; 6], rows: &[[String; 6]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut line, w| {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
        line
    });

    let line = |cells: Vec<&str>| -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths.iter()) {
            let pad = width - cell.chars().count();
            line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}
