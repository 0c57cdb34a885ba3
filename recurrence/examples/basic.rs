use recurrence::{
    Direction, EndCondition, MonthlyInterval, Ordinal, RecurrenceIterator, WeeklyInterval, Weekday,
};

fn main() -> recurrence::Result<()> {
    // Weekly stand-up, skipping a holiday
    let rule = WeeklyInterval::every(Weekday::Monday)
        .and_every(Weekday::Thursday)
        .of_every_week(2)?;
    println!("{rule}");

    let mut standups = RecurrenceIterator::new("2026-01-05T09:30:00", rule, 6u32)?;
    standups.skip(["2026-01-19T09:30:00"])?;
    for occurrence in standups.iter() {
        println!("  {}", occurrence?);
    }

    // Last Friday of the month, counted backwards to the start of the year
    let rule = MonthlyInterval::every(Ordinal::Last, Weekday::Friday);
    println!("\n{rule} (backwards)");
    let mut reviews = RecurrenceIterator::with_direction(
        "2026-10-18",
        rule,
        EndCondition::until("2026-01-01")?,
        Direction::Backwards,
    )?;
    println!("  {} occurrences", reviews.count()?);
    for occurrence in reviews.iter() {
        println!("  {}", occurrence?.date());
    }

    Ok(())
}
