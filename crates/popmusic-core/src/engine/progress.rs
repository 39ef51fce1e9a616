/// Events emitted while favourable mutations are applied to a host structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Selection finished; `total` mutations are about to be applied.
    MutationsSelected { total: usize },
    MutationApplied {
        index: usize,
        notation: String,
        delta_g: f64,
    },
    Finished { applied: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
