use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nadi_base::{
    NadiError, balance_ymd, birth_balance, calendar_to_jd, dasha, jd_to_date_string, kp_lords,
};
use nadi_chart::{
    Ayanamsa, ChartConfig, ChartInput, HouseSystem, NodeMode, OwnershipMode, compute_chart,
    house_of_longitude, house_owners, validate_cusps,
};

#[derive(Parser)]
#[command(name = "nadi", about = "KP chart and dasha CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// KP lordship chain for a sidereal longitude
    Lords {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// House placement for a longitude within a cusp set
    House {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// 12 comma-separated cusp longitudes
        #[arg(long)]
        cusps: String,
        /// Ascendant longitude (for the ownership table)
        #[arg(long, default_value = "0")]
        ascendant: f64,
        /// Ownership mode: CuspSign or WholeSign
        #[arg(long, default_value = "CuspSign")]
        ownership: String,
    },
    /// Vimshottari dasha from birth time and Moon longitude
    Dasha {
        /// Birth datetime, local civil time (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        birth: String,
        /// UTC offset of the birth time in hours (e.g. 5.5)
        #[arg(long, default_value = "0")]
        utc_offset: f64,
        /// Moon's sidereal longitude at birth, degrees
        #[arg(long)]
        moon_lon: f64,
        /// Reference datetime for current-period resolution (default: now)
        #[arg(long)]
        query: Option<String>,
    },
    /// Full chart from an ephemeris snapshot JSON file
    Chart {
        /// Path to a ChartInput JSON file
        #[arg(long)]
        input: PathBuf,
        /// Ayanamsa: Krishnamurti, KrishnamurtiOld, or Lahiri
        #[arg(long, default_value = "Krishnamurti")]
        ayanamsa: String,
        /// House system: Placidus or Equal
        #[arg(long, default_value = "Placidus")]
        house_system: String,
        /// Node mode: Mean or True
        #[arg(long, default_value = "Mean")]
        node_mode: String,
        /// Ownership mode: CuspSign or WholeSign
        #[arg(long, default_value = "CuspSign")]
        ownership: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn fail(err: NadiError) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}

fn parse_cusps(s: &str) -> [f64; 12] {
    let vals: Vec<f64> = s
        .split(',')
        .map(|v| {
            v.trim().parse::<f64>().unwrap_or_else(|e| {
                eprintln!("Invalid cusp '{v}': {e}");
                std::process::exit(1);
            })
        })
        .collect();
    if vals.len() != 12 {
        eprintln!("Expected 12 comma-separated cusps, got {}", vals.len());
        std::process::exit(1);
    }
    let mut arr = [0.0f64; 12];
    arr.copy_from_slice(&vals);
    arr
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Parse "YYYY-MM-DD HH:MM[:SS]" (or with 'T') into a civil tuple.
fn parse_datetime(s: &str) -> Result<(i32, u32, u32, u32, u32, f64), NadiError> {
    let bad = || NadiError::InvalidInput(format!("unparsable datetime: {s}"));

    let (date, time) = s
        .split_once([' ', 'T'])
        .ok_or_else(bad)?;
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(bad());
    }
    let year: i32 = date_parts[0].parse().map_err(|_| bad())?;
    let month: u32 = date_parts[1].parse().map_err(|_| bad())?;
    let day: u32 = date_parts[2].parse().map_err(|_| bad())?;

    let time_parts: Vec<&str> = time.split(':').collect();
    if time_parts.len() != 2 && time_parts.len() != 3 {
        return Err(bad());
    }
    let hour: u32 = time_parts[0].parse().map_err(|_| bad())?;
    let minute: u32 = time_parts[1].parse().map_err(|_| bad())?;
    let second: f64 = if time_parts.len() == 3 {
        time_parts[2].parse().map_err(|_| bad())?
    } else {
        0.0
    };

    if !(1..=12).contains(&month) || hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(NadiError::InvalidInput(format!(
            "datetime field out of range: {s}"
        )));
    }
    // Day checked against the real month length, so dates like
    // Feb 31 are rejected instead of rolling into March.
    if day < 1 || day > days_in_month(year, month) {
        return Err(NadiError::InvalidInput(format!(
            "no such calendar day: {s}"
        )));
    }
    Ok((year, month, day, hour, minute, second))
}

fn datetime_to_jd(s: &str, utc_offset_hours: f64) -> Result<f64, NadiError> {
    if !(-14.0..=14.0).contains(&utc_offset_hours) {
        return Err(NadiError::InvalidInput(format!(
            "UTC offset out of range: {utc_offset_hours}"
        )));
    }
    let (y, mo, d, h, mi, sec) = parse_datetime(s)?;
    Ok(calendar_to_jd(y, mo, d, h, mi, sec) - utc_offset_hours / 24.0)
}

fn now_jd() -> f64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    2_440_587.5 + secs / 86_400.0
}

fn run_lords(lon: f64) {
    let l = kp_lords(lon);
    println!("Rashi:        {} (lord {})", l.rashi.name(), l.rashi_lord.name());
    println!("Nakshatra:    {} pada {}", l.nakshatra.name(), l.pada);
    println!("Star lord:    {}", l.star_lord.name());
    println!("Sub lord:     {}", l.sub_lord.name());
    println!("Sub-sub lord: {}", l.sub_sub_lord.name());
    println!("Nadi:         {} ({})", l.nadi.name(), l.sub_index);
}

fn run_house(lon: f64, cusps_arg: &str, ascendant: f64, ownership_arg: &str) {
    let cusps = parse_cusps(cusps_arg);
    let ownership: OwnershipMode = ownership_arg.parse().unwrap_or_else(|e| fail(e));
    if let Err(e) = validate_cusps(&cusps) {
        fail(e);
    }
    let house = house_of_longitude(lon, &cusps).unwrap_or_else(|e| fail(e));
    let owners = house_owners(&cusps, ascendant, ownership).unwrap_or_else(|e| fail(e));
    println!("House: {house}");
    println!("Owner: {}", owners[(house - 1) as usize].name());
}

fn run_dasha(birth: &str, utc_offset: f64, moon_lon: f64, query: Option<&str>) {
    let birth_jd = datetime_to_jd(birth, utc_offset).unwrap_or_else(|e| fail(e));
    let query_jd = match query {
        Some(q) => datetime_to_jd(q, utc_offset).unwrap_or_else(|e| fail(e)),
        None => now_jd(),
    };
    debug!(birth_jd, query_jd, moon_lon, "dasha request");

    let balance = birth_balance(moon_lon);
    let (y, m, d) = balance_ymd(balance.balance_days);
    println!(
        "Balance at birth: {} {}y {}m {}d",
        balance.graha.name(),
        y,
        m,
        d
    );

    let hierarchy = dasha::hierarchy(birth_jd, moon_lon);
    println!("\nMahadashas:");
    for p in &hierarchy.levels[0] {
        println!(
            "  {:8} {} .. {}",
            p.graha.name(),
            jd_to_date_string(p.start_jd),
            jd_to_date_string(p.end_jd)
        );
    }

    let snap = dasha::snapshot(birth_jd, moon_lon, query_jd);
    println!("\nActive periods:");
    for p in &snap.periods {
        println!(
            "  {:16} {:8} {} .. {}",
            p.level.name(),
            p.graha.name(),
            jd_to_date_string(p.start_jd),
            jd_to_date_string(p.end_jd)
        );
    }
}

fn run_chart(
    input_path: &PathBuf,
    ayanamsa: &str,
    house_system: &str,
    node_mode: &str,
    ownership: &str,
    pretty: bool,
) {
    let config = ChartConfig {
        ayanamsa: ayanamsa.parse::<Ayanamsa>().unwrap_or_else(|e| fail(e)),
        house_system: house_system
            .parse::<HouseSystem>()
            .unwrap_or_else(|e| fail(e)),
        node_mode: node_mode.parse::<NodeMode>().unwrap_or_else(|e| fail(e)),
        ownership: ownership
            .parse::<OwnershipMode>()
            .unwrap_or_else(|e| fail(e)),
    };

    let raw = fs::read_to_string(input_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", input_path.display());
        std::process::exit(1);
    });
    let input: ChartInput = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Invalid chart input JSON: {e}");
        std::process::exit(1);
    });

    let result = compute_chart(&input, &config).unwrap_or_else(|e| fail(e));
    let json = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize chart: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lords { lon } => run_lords(lon),
        Commands::House {
            lon,
            cusps,
            ascendant,
            ownership,
        } => run_house(lon, &cusps, ascendant, &ownership),
        Commands::Dasha {
            birth,
            utc_offset,
            moon_lon,
            query,
        } => run_dasha(&birth, utc_offset, moon_lon, query.as_deref()),
        Commands::Chart {
            input,
            ayanamsa,
            house_system,
            node_mode,
            ownership,
            pretty,
        } => run_chart(
            &input,
            &ayanamsa,
            &house_system,
            &node_mode,
            &ownership,
            pretty,
        ),
    }
}
