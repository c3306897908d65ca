use crate::console::{draw_panel, get_terminal_width, wrap_text};

pub const ABOUT_TITLE: &str = "About Dryness Banana";

pub const ABOUT_TEXT: &str = "Dryness Banana estimates how far a batch of banana slices has dried from a single photo.\n\nThe image is sent to a classification service which labels it Kering (dry), Sedang (medium) or Basah (wet), together with the model's confidence and an estimated dryness level. Every analysis is stored by the service, so earlier results can be reviewed or removed with `dryness history` and `dryness delete`.\n\nThe goal is to help small producers of dried banana (sale pisang) decide when a batch is ready to be packed, without guessing by touch alone.";

pub const FACTS_TITLE: &str = "Banana Facts";

pub const BANANA_FACTS: &[&str] = &[
    "Bananas are berries in the botanical sense, while strawberries are not.",
    "A fresh banana is about 75% water; properly dried banana keeps only 15-20%.",
    "Indonesia is one of the world's largest banana producers and grows over 200 local varieties.",
    "Sale pisang is a traditional Indonesian snack made by sun- or oven-drying ripe bananas.",
    "Drying concentrates the natural sugars, which is why dried banana tastes sweeter than fresh fruit.",
    "Banana slices that are still wet in the centre spoil quickly in storage and attract mould.",
    "Potassium content stays high after drying: roughly 1,500 mg per 100 g of dried banana.",
    "Even drying depends on slice thickness; 3-5 mm slices dry far more uniformly than thick ones.",
];

/// Lines of a static page, wrapped to fit inside a panel of `width` columns.
pub fn about_lines(width: usize) -> Vec<String> {
    wrap_text(ABOUT_TEXT, panel_text_width(width))
}

pub fn facts_lines(width: usize) -> Vec<String> {
    let text_width = panel_text_width(width);
    let mut lines = Vec::new();
    for (i, fact) in BANANA_FACTS.iter().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let indent = " ".repeat(prefix.len());
        for (j, line) in wrap_text(fact, text_width.saturating_sub(prefix.len()))
            .into_iter()
            .enumerate()
        {
            let lead = if j == 0 { prefix.as_str() } else { indent.as_str() };
            lines.push(format!("{}{}", lead, line));
        }
    }
    lines
}

fn panel_text_width(width: usize) -> usize {
    width.saturating_sub(6).min(76)
}

pub fn show_about() {
    let width = get_terminal_width();
    draw_panel(ABOUT_TITLE, &about_lines(width), width);
}

pub fn show_facts() {
    let width = get_terminal_width();
    draw_panel(FACTS_TITLE, &facts_lines(width), width);
}
