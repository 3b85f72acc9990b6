use console::style;

const GAUGE_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendColor {
    Green,
    Red,
}

pub struct StatCard<'a> {
    pub title: &'a str,
    pub subtitle: String,
    pub trend: String,
    pub trend_color: TrendColor,
    pub value: usize,
    pub total: usize,
    /// As computed by the backend
    pub percentage: u8,
    pub label: &'a str,
}

impl StatCard<'_> {
    pub fn render(&self) -> String {
        let percentage = usize::from(self.percentage.min(100));
        let filled = percentage * GAUGE_WIDTH / 100;
        let gauge = format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(GAUGE_WIDTH - filled)
        );
        let trend = match self.trend_color {
            TrendColor::Green => style(&self.trend).green(),
            TrendColor::Red => style(&self.trend).red(),
        };

        format!(
            "{}\n  {}\n  {}\n  {} {}%\n  {} of {} {}\n",
            super::heading(self.title),
            self.subtitle,
            trend,
            gauge,
            percentage,
            style(self.value).bold(),
            self.total,
            self.label,
        )
    }
}
