use crate::core::checks::pillar_score;
use crate::domain::model::{
    ChartProps, MobileLayout, ResponsiveReport, SvgScalable, ZoomBehavior,
};

/// Responsive-behavior checks over the declared chart properties.
pub struct ResponsiveChecks {
    props: ChartProps,
}

impl ResponsiveChecks {
    pub fn new(props: ChartProps) -> Self {
        Self { props }
    }

    /// Content must survive 200% browser zoom.
    pub fn check_zoom_behavior(&self) -> ZoomBehavior {
        ZoomBehavior {
            zoom_200: self.props.zoom_200,
        }
    }

    pub fn check_mobile_layout(&self) -> MobileLayout {
        MobileLayout {
            mobile_adaptive: self.props.mobile_adaptive,
        }
    }

    pub fn check_svg_scalable(&self) -> SvgScalable {
        SvgScalable {
            svg_scalable: self.props.svg_scalable,
        }
    }

    pub fn run_all(&self) -> ResponsiveReport {
        let zoom_behavior = self.check_zoom_behavior();
        let mobile_layout = self.check_mobile_layout();
        let svg_scalable = self.check_svg_scalable();

        let passed = usize::from(zoom_behavior.zoom_200)
            + usize::from(mobile_layout.mobile_adaptive)
            + usize::from(svg_scalable.svg_scalable);
        let score = pillar_score(passed, 3);

        ResponsiveReport {
            zoom_behavior,
            mobile_layout,
            svg_scalable,
            score,
        }
    }
}
