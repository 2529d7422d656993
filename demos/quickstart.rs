use civtime::{
    CalendarDate, ClockDelta, ClockTime, ClockUnit, DateFormat, DateUnit, ReadableOptions,
    Rounding, Step,
};

fn main() {
    let today = CalendarDate::today();
    let now = ClockTime::now();

    println!("Today: {today}");
    println!("Month: {}", today.round(DateUnit::Month).to_readable(DateFormat::MonthNameDayYear));
    println!("Now: {now}");
    println!("Nearest minute: {}", now.round((ClockUnit::Minute, Rounding::Nearest)));

    let next = today.add([Step::new(DateUnit::Month, 1), Step::new(DateUnit::Day, 1)]);
    println!("A month and a day from now: {next} ({} days)", today.days_until(&next));

    let lunch = ClockTime::new(12, 30, 0, 0);
    let wait: ClockDelta = lunch - now;
    let words = ReadableOptions {
        verbose: true,
        ..ReadableOptions::default()
    };
    println!("Until lunch: {}", wait.to_readable(words));
}
