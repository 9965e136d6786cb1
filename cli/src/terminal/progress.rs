use indicatif::ProgressStyle;

const SWEEP_TEMPLATE: &str =
    "{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len} hosts ({elapsed})";

pub fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template(SWEEP_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}
