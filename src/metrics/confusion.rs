use colored::Colorize;

/// Counts of (actual, predicted) label pairs. Rows are actual classes,
/// columns predicted classes, both in the order given at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Confusion {
    classes: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl Confusion {
    /// Pairs whose labels are not among `classes` are ignored.
    pub fn new<S: AsRef<str>>(classes: &[String], truth: &[S], predicted: &[S]) -> Self {
        let index = |label: &str| classes.iter().position(|c| c == label);
        let mut counts = vec![vec![0; classes.len()]; classes.len()];
        for (t, p) in truth.iter().zip(predicted) {
            if let (Some(i), Some(j)) = (index(t.as_ref()), index(p.as_ref())) {
                counts[i][j] += 1;
            }
        }
        Self {
            classes: classes.to_vec(),
            counts,
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.counts[actual][predicted]
    }
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
    /// Rows correctly classified as class `i`.
    pub fn hits(&self, i: usize) -> usize {
        self.counts[i][i]
    }
    /// Rows whose actual class is `i`.
    pub fn support(&self, i: usize) -> usize {
        self.counts[i].iter().sum()
    }
    /// Rows predicted as class `i`.
    pub fn predicted(&self, i: usize) -> usize {
        self.counts.iter().map(|row| row[i]).sum()
    }

    /// Heatmap on a white-to-blue scale, one cell per count. Darker cells
    /// switch to white text so counts stay legible.
    pub fn heatmap(&self) -> String {
        let max = self.counts.iter().flatten().copied().max().unwrap_or(0).max(1);
        let width = self
            .classes
            .iter()
            .map(String::len)
            .chain(std::iter::once(6))
            .max()
            .unwrap_or(6)
            .min(12);
        let name = |s: &str| s.chars().take(width).collect::<String>();
        let mut out = String::new();
        out.push_str(&format!("{:>w$} | predicted\n", "actual", w = width));
        out.push_str(&format!("{:>w$} |", "", w = width));
        for class in &self.classes {
            out.push_str(&format!(" {:>w$}", name(class), w = width));
        }
        out.push('\n');
        for (i, row) in self.counts.iter().enumerate() {
            out.push_str(&format!("{:>w$} |", name(&self.classes[i]), w = width));
            for &count in row {
                let t = count as f32 / max as f32;
                let (r, g, b) = Self::blues(t);
                let cell = format!(" {:>w$}", count, w = width).on_truecolor(r, g, b);
                let cell = if t > 0.5 { cell.white() } else { cell.black() };
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Linear blend between a pale and a deep blue.
    fn blues(t: f32) -> (u8, u8, u8) {
        let lerp = |a: f32, b: f32| (a + (b - a) * t.clamp(0.0, 1.0)).round() as u8;
        (lerp(247., 8.), lerp(251., 48.), lerp(255., 107.))
    }
}
