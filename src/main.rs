use cfbd_api::client::{CfbdClient, SeasonType, TeamWeekFilter};
use cfbd_api::drives::segment_into_drives;
use cfbd_api::{Drive, GameEvent};
use log::debug;

const API_KEY_VAR: &str = "COLLEGE_FOOTBALL_DATA_API_KEY";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let options = parse_cli_args();

    let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
        anyhow::anyhow!("{API_KEY_VAR} is not set (get a key at https://collegefootballdata.com)")
    })?;

    let client = CfbdClient::new(api_key);
    let events = match client.fetch_events_by_team_week(&options.filter).await {
        Ok(events) => events,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    debug!("Classified {} game events", events.len());

    let drives = segment_into_drives(events);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&drives)?);
    } else {
        print_drive_chart(&options.filter, &drives);
    }

    Ok(())
}

fn print_drive_chart(filter: &TeamWeekFilter, drives: &[Drive]) {
    println!(
        "{} drives for {}, week {} of {}",
        drives.len(),
        filter.team,
        filter.week,
        filter.year
    );
    for (index, drive) in drives.iter().enumerate() {
        println!();
        println!("Drive {} ({} events)", index + 1, drive.events.len());
        for event in &drive.events {
            println!("  {}", describe_event(event));
        }
    }
}

fn describe_event(event: &GameEvent) -> String {
    let clock = event.clock();
    let period = if clock.period > 4 {
        format!("OT{}", clock.period - 4)
    } else {
        format!("Q{}", clock.period)
    };
    format!(
        "{period} {:>2}:{:02}  {} ({})",
        clock.seconds_remaining / 60,
        clock.seconds_remaining % 60,
        event.event_type().label(),
        event.field_position().possession_team,
    )
}

struct CliOptions {
    filter: TeamWeekFilter,
    json: bool,
}

fn parse_cli_args() -> CliOptions {
    let mut args = std::env::args().skip(1);
    let mut team: Option<String> = None;
    let mut year: Option<u16> = None;
    let mut week: Option<u8> = None;
    let mut season_type = SeasonType::Regular;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("drivechart {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--team" => team = Some(require_value(&mut args, "--team")),
            "--year" => year = Some(parse_number(&mut args, "--year")),
            "--week" => week = Some(parse_number(&mut args, "--week")),
            "--season-type" => {
                let value = require_value(&mut args, "--season-type");
                season_type = match value.as_str() {
                    "regular" => SeasonType::Regular,
                    "postseason" => SeasonType::Postseason,
                    "both" => SeasonType::Both,
                    _ => usage_error(&format!("Invalid --season-type: {value}")),
                };
            }
            "--json" => json = true,
            _ => usage_error(&format!("Unknown argument: {arg}")),
        }
    }

    let Some(team) = team else {
        usage_error("Missing required flag: --team");
    };
    let Some(year) = year else {
        usage_error("Missing required flag: --year");
    };
    let Some(week) = week else {
        usage_error("Missing required flag: --week");
    };

    CliOptions { filter: TeamWeekFilter { season_type, year, week, team }, json }
}

fn require_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => usage_error(&format!("{flag} requires a value")),
    }
}

fn parse_number<T: std::str::FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> T {
    let raw = require_value(args, flag);
    match raw.parse() {
        Ok(value) => value,
        Err(_) => usage_error(&format!("{flag} expects a number, got {raw}")),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}\n\n{}", usage_text());
    std::process::exit(2);
}

fn usage_text() -> &'static str {
    "drivechart - college football drive charts from CFBD play-by-play

Usage:
  drivechart --team <name> --year <year> --week <week> [--season-type <type>] [--json]
  drivechart --help
  drivechart --version

Options:
  --team <name>         Team name as CFBD spells it, e.g. \"Notre Dame\"
  --year <year>         Season year, e.g. 2024
  --week <week>         Week number within the season
  --season-type <type>  regular, postseason, or both (default regular)
  --json                Emit drives as pretty-printed JSON instead of a chart

Environment:
  COLLEGE_FOOTBALL_DATA_API_KEY   CFBD API bearer token (required)"
}
