use clap::{Parser, ValueEnum};
use songsim::{
    project, DatasetLoader, Distance, Feature, Outcome, RecommendConfig, Recommendation,
    Recommender, Report, DEFAULT_COUNT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::builder::Builder;
use tabled::{Table, Tabled};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend songs similar to a favourite track
#[derive(Parser, Debug)]
#[command(name = "songsim")]
#[command(about = "Song recommendations based on audio features", long_about = None)]
struct Args {
    /// Path to the clustered song dataset (CSV)
    #[arg(short, long, default_value = "clean_clustered_songs.csv")]
    data: PathBuf,

    /// Track to find recommendations for (exact name)
    #[arg(short, long, required_unless_present = "list")]
    song: Option<String>,

    /// Number of recommendations
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Features to compare, comma separated (default: all ten)
    #[arg(long, value_delimiter = ',')]
    features: Vec<Feature>,

    /// Similarity metric: cosine, euclidean or dot
    #[arg(long, default_value_t = Distance::Cosine)]
    distance: Distance,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the available songs and exit
    #[arg(long)]
    list: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Starting SongSim v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let dataset = DatasetLoader::load(&args.data)?;
    let table = dataset.table;

    if args.list {
        for track in table.track_names() {
            println!("{}", track);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(song) = args.song.as_deref() else {
        anyhow::bail!("--song is required unless --list is given");
    };

    let features = if args.features.is_empty() {
        Feature::ALL.to_vec()
    } else {
        args.features.clone()
    };
    let config = RecommendConfig::default()
        .with_count(args.count)
        .with_features(features)
        .with_distance(args.distance);
    let recommender = Recommender::new(config)?;

    let recommendation = recommender.recommend(song, &table);
    let outcome = project(song, &recommendation, recommender.features())?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => match &outcome {
            Outcome::Matches(report) => render_report(report, &recommendation),
            Outcome::NotFound { .. } => eprintln!("Song not found or no matches."),
        },
    }

    if outcome.is_not_found() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Tabled)]
struct ListingDisplay {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Track")]
    track: String,
    #[tabled(rename = "Artist")]
    artist: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Score")]
    score: String,
}

fn render_report(report: &Report, recommendation: &Recommendation) {
    println!("Songs similar to '{}':", report.query);
    let rows: Vec<ListingDisplay> = report
        .listing
        .iter()
        .zip(&recommendation.matches)
        .enumerate()
        .map(|(i, (row, ranked))| ListingDisplay {
            rank: i + 1,
            track: row.track.clone(),
            artist: row.artist.clone(),
            year: row.year,
            score: format!("{:.3}", ranked.score),
        })
        .collect();
    println!("{}", Table::new(rows));

    println!();
    println!("Feature comparison with top match:");
    let comparison = &report.comparison;
    let mut builder = Builder::default();
    builder.push_record([
        "Feature".to_string(),
        comparison.query_label.clone(),
        comparison.match_label.clone(),
    ]);
    for row in &comparison.rows {
        builder.push_record([
            row.feature.to_string(),
            format!("{:.3}", row.query),
            format!("{:.3}", row.matched),
        ]);
    }
    println!("{}", builder.build());

    println!();
    println!("Radial comparison:");
    let radial = &report.radial;
    let mut builder = Builder::default();
    builder.push_record([
        "Feature".to_string(),
        "Angle".to_string(),
        radial.query_label.clone(),
        radial.match_label.clone(),
    ]);
    for point in &radial.points {
        builder.push_record([
            point.feature.to_string(),
            format!("{:.1}°", point.angle.to_degrees()),
            format!("{:.3}", point.query),
            format!("{:.3}", point.matched),
        ]);
    }
    println!("{}", builder.build());
    println!("Note: feature values have been normalized between 0 and 1 for visual comparison.");

    let stats = &report.stats;
    if let Some(cluster) = stats.cluster {
        info!(
            "Cluster {}: {} songs, best score {:.3}, mean score {:.3}",
            cluster, stats.cluster_size, stats.best_score, stats.avg_score
        );
    }
}
