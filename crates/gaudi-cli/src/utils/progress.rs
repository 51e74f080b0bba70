use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

/// Progress over a batch of input files. Hidden when there is only one file.
#[derive(Clone)]
pub struct BatchProgress {
    pb: ProgressBar,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        let pb = if total > 1 {
            let pb = ProgressBar::new(total as u64).with_style(Self::bar_style());
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb.set_message("Validating");
            pb
        } else {
            ProgressBar::hidden()
        };
        Self { pb }
    }

    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .map(|style| {
                style
                    .with_key(
                        "eta",
                        |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                        },
                    )
                    .progress_chars("##-")
            })
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
