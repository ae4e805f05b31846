use crate::core::checks::pillar_score;
use crate::domain::model::{
    ChartElements, CognitiveReport, ElementCount, LayoutComplexity, LegendEntries, Thresholds,
};

/// Cognitive-load checks over the declared chart element counts.
pub struct CognitiveChecks {
    elements: ChartElements,
}

impl CognitiveChecks {
    pub fn new(elements: ChartElements) -> Self {
        Self { elements }
    }

    /// Series and gridline counts, reported as-is.
    pub fn check_element_count(&self) -> ElementCount {
        ElementCount {
            series: self.elements.series,
            gridlines: self.elements.gridlines,
        }
    }

    pub fn check_legend_entries(&self, max_entries: u32) -> LegendEntries {
        LegendEntries {
            legend_entries: self.elements.legend_entries,
            pass: self.elements.legend_entries <= max_entries,
        }
    }

    pub fn check_layout_complexity(&self, max_encodings: u32) -> LayoutComplexity {
        LayoutComplexity {
            encodings: self.elements.encodings,
            pass: self.elements.encodings <= max_encodings,
        }
    }

    pub fn run_all(&self, thresholds: &Thresholds) -> CognitiveReport {
        let element_count = self.check_element_count();
        let legend_entries = self.check_legend_entries(thresholds.max_legend_entries);
        let layout_complexity = self.check_layout_complexity(thresholds.max_encodings);

        let passed = usize::from(legend_entries.pass) + usize::from(layout_complexity.pass);
        let score = pillar_score(passed, 2);

        CognitiveReport {
            element_count,
            legend_entries,
            layout_complexity,
            score,
        }
    }
}
