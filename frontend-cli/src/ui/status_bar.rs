//! Summary lines printed after listings and tree kills.

use backend::{ProcessRecord, TerminationResult};

pub struct StatusBar;

impl StatusBar {
    pub fn processes(processes: &[ProcessRecord]) -> String {
        format!("Total processes: {}", processes.len())
    }

    pub fn terminations(results: &[TerminationResult]) -> String {
        let stopped = results.iter().filter(|r| r.outcome.is_success()).count();
        format!("Stopped: {}, Failed: {}", stopped, results.len() - stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::Outcome;

    #[test]
    fn counts_failures_separately() {
        let results = vec![
            TerminationResult { pid: 4, outcome: Outcome::Success },
            TerminationResult { pid: 3, outcome: Outcome::Failed("gone".into()) },
            TerminationResult { pid: 1, outcome: Outcome::Success },
        ];
        assert_eq!(StatusBar::terminations(&results), "Stopped: 2, Failed: 1");
        assert_eq!(StatusBar::processes(&[]), "Total processes: 0");
    }
}
