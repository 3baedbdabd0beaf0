use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spotify_listening::{
    ClientConfig, SpotifyClient, SpotifyId, TimeRange, TopItemsOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify-listening-cli")]
#[command(about = "Inspect your Spotify listening history, top items and track analysis", long_about = None)]
struct Cli {
    /// OAuth access token (can also be set via SPOTIFY_ACCESS_TOKEN env var)
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// API base URL
    #[arg(long, env = "SPOTIFY_API_BASE_URL", default_value = spotify_listening::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the decoded response as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show recently played tracks
    Recent {
        /// Number of plays (1-50)
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
    /// Show your top tracks
    TopTracks(TopArgs),
    /// Show your top artists
    TopArtists(TopArgs),
    /// Show the audio analysis of a track
    Analysis {
        /// Spotify track ID
        track_id: String,
    },
}

#[derive(Args)]
struct TopArgs {
    /// Number of items (1-50)
    #[arg(short, long)]
    limit: Option<u32>,

    /// Index of the first item
    #[arg(short, long)]
    offset: Option<u32>,

    /// Period the ranking is computed over
    #[arg(short, long, value_enum)]
    range: Option<Range>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Range {
    #[value(name = "short_term")]
    ShortTerm,
    #[value(name = "medium_term")]
    MediumTerm,
    #[value(name = "long_term")]
    LongTerm,
}

impl From<Range> for TimeRange {
    fn from(r: Range) -> Self {
        match r {
            Range::ShortTerm => TimeRange::ShortTerm,
            Range::MediumTerm => TimeRange::MediumTerm,
            Range::LongTerm => TimeRange::LongTerm,
        }
    }
}

impl From<&TopArgs> for TopItemsOptions {
    fn from(args: &TopArgs) -> Self {
        TopItemsOptions {
            limit: args.limit,
            offset: args.offset,
            time_range: args.range.map(Into::into),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    config.base_url = cli.base_url.clone();
    let client = SpotifyClient::with_config(&cli.token, config)?;

    match &cli.command {
        Commands::Recent { limit } => {
            let history = client.current_user_recent_tracks(*limit).await?;
            if cli.json {
                return print_json(&history);
            }
            for item in &history.items {
                println!(
                    "{}  {} - {}",
                    item.played_at,
                    item.track.artists_string(", "),
                    item.track.name
                );
            }
        }
        Commands::TopTracks(args) => {
            let options = TopItemsOptions::from(args);
            let top = client.current_user_top_tracks(Some(&options)).await?;
            if cli.json {
                return print_json(&top);
            }
            for (i, track) in top.items.iter().enumerate() {
                println!(
                    "{}. {} - {} (ID: {})",
                    top.offset as usize + i + 1,
                    track.artists_string(", "),
                    track.name,
                    track.id
                );
            }
        }
        Commands::TopArtists(args) => {
            let options = TopItemsOptions::from(args);
            let top = client.current_user_top_artists(Some(&options)).await?;
            if cli.json {
                return print_json(&top);
            }
            for (i, artist) in top.items.iter().enumerate() {
                println!(
                    "{}. {} [{}] (ID: {})",
                    top.offset as usize + i + 1,
                    artist.name,
                    artist.genres_string(", "),
                    artist.id
                );
            }
        }
        Commands::Analysis { track_id } => {
            let analysis = client.get_audio_analysis(&SpotifyId::new(track_id.as_str())).await?;
            if cli.json {
                return print_json(&analysis);
            }
            let track = &analysis.track;
            println!("Duration:       {:.1}s", track.duration);
            println!("Tempo:          {:.1} BPM", track.tempo);
            println!(
                "Key:            {}",
                track.key_signature().unwrap_or_else(|| "unknown".to_string())
            );
            println!("Time signature: {}/4", track.time_signature);
            println!("Loudness:       {:.1} dB", track.loudness);
            println!(
                "Bars/beats:     {}/{}",
                analysis.bars.len(),
                analysis.beats.len()
            );
            println!("Sections:");
            for section in &analysis.sections {
                println!(
                    "  {:>7.2}s  {:>6.1} BPM  {}",
                    section.start,
                    section.tempo,
                    section.key_name().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
