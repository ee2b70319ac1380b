//! Terminal rendering of a prompt batch.

use colored::{Color, Colorize};

use crate::categories::Category;
use crate::generator::BatchWarning;
use crate::quality::AcceptedPrompt;

const TABLE_TITLE: &str = "MCbench Prompt Batch";

fn tag_color(category: Category) -> Color {
    match category {
        Category::HistoryScience => Color::Green,
        Category::Myth => Color::Yellow,
        Category::Pop => Color::BrightBlue,
        Category::Tech => Color::Cyan,
        Category::Arch => Color::BrightWhite,
        Category::Nature => Color::BrightGreen,
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, cols: usize) -> String {
    format!("{}{}", text, " ".repeat(cols.saturating_sub(width(text))))
}

fn rule(left: &str, mid: &str, right: &str, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

/// Renders accepted prompts as a boxed table with `#`, `Prompt` and `Tag`
/// columns and a rule between rows.
pub fn render_table(prompts: &[AcceptedPrompt]) -> String {
    let index_width = width(&prompts.len().to_string()).max(1);
    let prompt_width = prompts
        .iter()
        .map(|p| width(&p.text))
        .chain(std::iter::once(width("Prompt")))
        .max()
        .unwrap_or_default();
    let tag_width = prompts
        .iter()
        .map(|p| width(p.category.display_name()))
        .chain(std::iter::once(width("Tag")))
        .max()
        .unwrap_or_default();
    let widths = [index_width, prompt_width, tag_width];

    let total_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
    let title_pad = total_width.saturating_sub(width(TABLE_TITLE)) / 2;

    let mut lines = Vec::with_capacity(prompts.len() * 2 + 5);
    lines.push(format!(
        "{}{}",
        " ".repeat(title_pad),
        TABLE_TITLE.italic()
    ));
    lines.push(rule("┌", "┬", "┐", &widths));
    lines.push(format!(
        "│ {:>iw$} │ {} │ {} │",
        "#".bold().cyan(),
        pad("Prompt", prompt_width).bold(),
        pad("Tag", tag_width).bold().magenta(),
        iw = index_width
    ));
    lines.push(rule("├", "┼", "┤", &widths));

    for (idx, prompt) in prompts.iter().enumerate() {
        if idx > 0 {
            lines.push(rule("├", "┼", "┤", &widths));
        }
        let index = format!("{:>iw$}", idx + 1, iw = index_width);
        lines.push(format!(
            "│ {} │ {} │ {} │",
            index.bold().cyan(),
            pad(&prompt.text, prompt_width),
            pad(prompt.category.display_name(), tag_width)
                .bold()
                .color(tag_color(prompt.category)),
        ));
    }

    lines.push(rule("└", "┴", "┘", &widths));
    lines.join("\n")
}

/// Renders each warning as a `WARNING: ...` line.
pub fn render_warnings(warnings: &[BatchWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|warning| format!("{}: {}", "WARNING".red().bold(), warning))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(text: &str, category: Category) -> AcceptedPrompt {
        AcceptedPrompt {
            line: format!("{} ({})", text, category),
            text: text.to_string(),
            category,
        }
    }

    #[test]
    fn test_render_table_rows() {
        colored::control::set_override(false);
        let prompts = vec![
            prompt("Carve a giant sphinx", Category::Myth),
            prompt("Erect a lighthouse on a stormy coast", Category::HistoryScience),
        ];
        let table = render_table(&prompts);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("MCbench Prompt Batch"));
        assert!(lines[2].contains("# │ Prompt"));
        assert!(table.contains("│ 1 │ Carve a giant sphinx"));
        assert!(table.contains("│ 2 │ Erect a lighthouse on a stormy coast │ History/Science │"));
        // Tag suffixes are not repeated in the prompt column.
        assert!(!table.contains("(Myth)"));

        // Every table line has the same width.
        let widths: Vec<usize> = lines[1..].iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_empty_table() {
        colored::control::set_override(false);
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 5);
        assert!(table.contains("Prompt"));
    }

    #[test]
    fn test_render_warnings() {
        colored::control::set_override(false);
        let lines = render_warnings(&[
            BatchWarning::MissingCategories(vec![Category::Pop, Category::Nature]),
            BatchWarning::Shortfall {
                accepted: 7,
                target: 10,
            },
        ]);

        assert_eq!(
            lines,
            vec![
                "WARNING: missing tag(s): Pop, Nature".to_string(),
                "WARNING: only 7 valid prompts produced – regenerate or tweak temperature."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_tag_colors_are_distinct() {
        let colors: Vec<Color> = Category::all().into_iter().map(tag_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
