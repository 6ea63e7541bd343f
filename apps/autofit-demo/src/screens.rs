use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use autofit_core::{
    AutoFitConfig, AutoFitGroup, FitConstraint, FitError, Size, TextMeasurer, TextSource,
};
use autofit_ui_graphics::{Density, Dp, EdgeInsets};

const LABEL_WIDTH: Dp = Dp(320.0);
const LABEL_PADDING: Dp = Dp(8.0);
const OUTPUT_CONSTRAINTS: [FitConstraint; 3] =
    [FitConstraint::Width, FitConstraint::Height, FitConstraint::Both];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    SingleLine,
    MultiLine,
}

impl ScreenKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "single" | "singleline" | "single-line" => Some(ScreenKind::SingleLine),
            "multi" | "multiline" | "multi-line" => Some(ScreenKind::MultiLine),
            _ => None,
        }
    }

    fn label_height(self) -> Dp {
        match self {
            ScreenKind::SingleLine => Dp(48.0),
            ScreenKind::MultiLine => Dp(120.0),
        }
    }

    fn max_lines(self) -> usize {
        match self {
            ScreenKind::SingleLine => 1,
            ScreenKind::MultiLine => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::SingleLine => "Single-line example",
            ScreenKind::MultiLine => "Multi-line example",
        }
    }
}

/// What one output label would render after the latest input.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelState {
    pub constraint: Option<FitConstraint>,
    pub text: String,
    pub text_size: f32,
    pub fits: bool,
}

impl fmt::Display for LabelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.constraint {
            None => "plain",
            Some(FitConstraint::Width) => "width",
            Some(FitConstraint::Height) => "height",
            Some(FitConstraint::Both) => "both",
        };
        let overflow = if self.fits { "" } else { " (overflows)" };
        write!(f, "{name:>6}: {:6.2}px{overflow}", self.text_size)
    }
}

pub struct Screen {
    kind: ScreenKind,
    input: TextSource,
    plain_output: Rc<RefCell<String>>,
    plain_text_size: f32,
    labels: AutoFitGroup,
}

impl Screen {
    pub fn new(
        kind: ScreenKind,
        measurer: Rc<dyn TextMeasurer>,
        density: Density,
    ) -> Result<Self, FitError> {
        let config = AutoFitConfig::default()
            .with_density(density)
            .with_max_lines(Some(kind.max_lines()));
        let bounds = Size::new(
            LABEL_WIDTH.to_px(density.density),
            kind.label_height().to_px(density.density),
        );
        let padding = EdgeInsets::uniform(LABEL_PADDING.to_px(density.density));

        let mut labels = AutoFitGroup::new(measurer, config)?;
        let mut input = TextSource::new();

        let plain_output = Rc::new(RefCell::new(String::new()));
        let plain = Rc::clone(&plain_output);
        input.observe(move |text| {
            *plain.borrow_mut() = text.to_owned();
            Ok(())
        });

        for constraint in OUTPUT_CONSTRAINTS {
            let index = labels.add_host(bounds, constraint)?;
            if let Some(host) = labels.host(index) {
                host.borrow_mut().set_padding(padding)?;
                input.bind_host(host)?;
            }
        }

        log::info!("{} ready with {} auto-fit labels", kind.title(), labels.len());
        Ok(Self {
            kind,
            input,
            plain_output,
            plain_text_size: config.max_text_size_px(),
            labels,
        })
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Replaces the input field's content, as if the user typed it.
    pub fn type_text(&mut self, text: &str) -> Result<(), FitError> {
        self.input.set_text(text)
    }

    pub fn labels(&self) -> Result<Vec<LabelState>, FitError> {
        let mut states = vec![LabelState {
            constraint: None,
            text: self.plain_output.borrow().clone(),
            text_size: self.plain_text_size,
            fits: true,
        }];
        for host in self.labels.hosts() {
            let mut host = host.borrow_mut();
            let fit = host.current_fit()?;
            states.push(LabelState {
                constraint: Some(host.constraint()),
                text: host.text().to_owned(),
                text_size: fit.resolved_size,
                fits: fit.fits,
            });
        }
        Ok(states)
    }
}
