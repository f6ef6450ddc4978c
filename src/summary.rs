use crate::models::{Series, Summary};

impl<L: Clone> Series<L> {
    /// Total, average and the label of the largest value.
    ///
    /// NaN anywhere in the values propagates into the total and average and
    /// leaves `highest_label` empty; an empty series averages to NaN.
    pub fn summary(&self) -> Summary<L> {
        let total: f64 = self.values.iter().sum();
        let average = total / self.values.len() as f64;

        Summary {
            total,
            average,
            average_display: format!("{average:.2}"),
            highest_label: highest_index(&self.values)
                .and_then(|index| self.labels.get(index).cloned()),
        }
    }
}

fn highest_index(values: &[f64]) -> Option<usize> {
    if values.iter().any(|value| value.is_nan()) {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.iter().copied().enumerate() {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}
