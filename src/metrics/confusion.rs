use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::data::dataset::DiscreteValue;
use crate::error::TreeError;

/// Counts of (true class, predicted class) pairs.
///
/// Rows are true classes and columns predicted classes, both in class order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix<T: DiscreteValue> {
    classes: Vec<T>,
    counts: DMatrix<usize>,
}

impl<T: DiscreteValue> ConfusionMatrix<T> {
    pub fn classes(&self) -> &[T] {
        &self.classes
    }

    pub fn counts(&self) -> &DMatrix<usize> {
        &self.counts
    }

    /// Number of examples of class `actual` predicted as `predicted`.
    pub fn get(&self, actual: &T, predicted: &T) -> usize {
        match (self.position(actual), self.position(predicted)) {
            (Some(row), Some(col)) => self.counts[(row, col)],
            _ => 0,
        }
    }

    fn position(&self, class: &T) -> Option<usize> {
        self.classes.binary_search(class).ok()
    }
}

pub trait ClassificationMetrics<T: DiscreteValue> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The confusion matrix over every class appearing in either sequence.
    fn confusion_matrix(
        &self,
        y_true: &[T],
        y_pred: &[T],
    ) -> Result<ConfusionMatrix<T>, TreeError> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch(y_true.len(), y_pred.len()));
        }

        let classes: Vec<T> = y_true
            .iter()
            .chain(y_pred.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut matrix = ConfusionMatrix {
            counts: DMatrix::zeros(classes.len(), classes.len()),
            classes,
        };

        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            if let (Some(row), Some(col)) = (matrix.position(y_t), matrix.position(y_p)) {
                matrix.counts[(row, col)] += 1;
            }
        }

        Ok(matrix)
    }

    /// Share of predictions equal to the true label.
    fn accuracy(&self, y_true: &[T], y_pred: &[T]) -> Result<f64, TreeError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(TreeError::UndefinedScore(
                "Accuracy of an empty prediction set is undefined.".into(),
            ));
        }

        Ok(matrix.counts.diagonal().sum() as f64 / y_true.len() as f64)
    }

    /// Precision averaged over classes (macro average).
    fn precision(&self, y_true: &[T], y_pred: &[T]) -> Result<f64, TreeError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.counts.nrows();
        if num_classes == 0 {
            return Ok(0.0);
        }

        let precision_total: f64 = (0..num_classes)
            .filter_map(|class| {
                let tp = matrix.counts[(class, class)];
                let predicted = matrix.counts.column(class).sum();
                (predicted > 0).then(|| tp as f64 / predicted as f64)
            })
            .sum();

        Ok(precision_total / num_classes as f64)
    }

    /// Recall averaged over classes (macro average).
    fn recall(&self, y_true: &[T], y_pred: &[T]) -> Result<f64, TreeError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.counts.nrows();
        if num_classes == 0 {
            return Ok(0.0);
        }

        let recall_total: f64 = (0..num_classes)
            .filter_map(|class| {
                let tp = matrix.counts[(class, class)];
                let actual = matrix.counts.row(class).sum();
                (actual > 0).then(|| tp as f64 / actual as f64)
            })
            .sum();

        Ok(recall_total / num_classes as f64)
    }

    /// Harmonic mean of [`precision`](Self::precision) and [`recall`](Self::recall).
    fn f1_score(&self, y_true: &[T], y_pred: &[T]) -> Result<f64, TreeError> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        match (precision + recall).abs() < f64::EPSILON {
            true => Err(TreeError::UndefinedScore(
                "Precision and recall are both 0, F1 score undefined.".into(),
            )),
            false => Ok(2.0 * (precision * recall) / (precision + recall)),
        }
    }
}
