use clap::Args;
use ward_pay::allocation::{PayoutRequest, PayoutService};
use ward_pay::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Patient count for the period
    #[arg(long)]
    pub(crate) patients: i64,
    /// RN4 headcount on the shift
    #[arg(long, default_value_t = 0)]
    pub(crate) rn4: i64,
    /// RN3 headcount on the shift
    #[arg(long, default_value_t = 0)]
    pub(crate) rn3: i64,
    /// RN2 headcount on the shift
    #[arg(long, default_value_t = 0)]
    pub(crate) rn2: i64,
    /// RN1 headcount on the shift
    #[arg(long, default_value_t = 0)]
    pub(crate) rn1: i64,
    /// PN1 headcount on the shift
    #[arg(long, default_value_t = 0)]
    pub(crate) pn1: i64,
    /// Emit the outcome as pretty JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_allocation(args: AllocateArgs) -> Result<(), AppError> {
    let request = PayoutRequest {
        patient_count: args.patients,
        rn4_count: args.rn4,
        rn3_count: args.rn3,
        rn2_count: args.rn2,
        rn1_count: args.rn1,
        pn1_count: args.pn1,
    };

    let service = PayoutService::new();
    let outcome = service.solve(&request).map_err(AppError::from)?;

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Outcome unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!("Payout allocation for {} patient(s)", args.patients);
    println!("- revenue pool: {}", outcome.total_revenue);
    println!("- base rate (RN4): {}", outcome.base_rate);
    println!("Payout table:");
    for line in &outcome.lines {
        println!(
            "  - {}: {} x {} = {}",
            line.role, line.headcount, line.rate, line.subtotal
        );
    }
    println!("- total paid: {}", outcome.total_paid);
    println!("- remainder: {}", outcome.remainder);
    if let Some(top_up) = &outcome.top_up {
        println!(
            "- PN1 top-up: {} per person ({} absorbed, {} dropped)",
            top_up.per_person, top_up.absorbed, top_up.dropped
        );
    }
    if outcome.warnings.is_empty() {
        println!("- policy warnings: none");
    } else {
        println!("Policy warnings:");
        for warning in &outcome.warnings {
            println!("  - {}", warning.summary());
        }
    }

    Ok(())
}
