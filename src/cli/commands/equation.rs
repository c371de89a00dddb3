//! `equation` command: the governing equation and the input ranges

use crate::cli::widgets::{C0_RANGE, CANDIDATE_DEPTHS, DAYS_RANGE, DISPERSION_RANGE};

/// Text shown below the chart on the interactive page
pub fn equation_text() -> String {
    format!(
        "Equation used:\n\
         \n    C(z, t) = C0 * erfc( z / (2 * sqrt(D * t)) )\n\
         \nwhere:\n\
         \x20 C0   = initial contaminant concentration (mg/L), {}..={}\n\
         \x20 D    = dispersion coefficient (cm²/day), {}..={}\n\
         \x20 z    = depth (cm), one of {:?}\n\
         \x20 t    = time (days), simulated up to a horizon in {}..={}\n\
         \x20 erfc = complementary error function\n",
        C0_RANGE.start(),
        C0_RANGE.end(),
        DISPERSION_RANGE.start(),
        DISPERSION_RANGE.end(),
        CANDIDATE_DEPTHS,
        DAYS_RANGE.start(),
        DAYS_RANGE.end(),
    )
}
