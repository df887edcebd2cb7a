//! Recommend command implementation for the Park Picks CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkpicks_core::{DEFAULT_TOP_PICKS, Park, PreferenceProfile, RideSource, ScoredRide};
use parkpicks_data::{Catalogue, FeedDirectorySource};
use parkpicks_fs::open_utf8_file;
use parkpicks_scorer::{Recommender, RuleScorer, RuleWeights};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECOMMEND_FEED_DIR, ARG_RECOMMEND_REQUEST, ARG_RECOMMEND_TOP, CliError,
    ENV_RECOMMEND_FEED_DIR, ENV_RECOMMEND_REQUEST, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the open rides of a park for one visitor. The park and \
                 the visitor's preferences come from a JSON request file; \
                 live wait times are read from <feed id>.json snapshots in \
                 the feed directory.",
    about = "Recommend rides for a visitor"
)]
#[ortho_config(prefix = "PARKPICKS")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a RecommendRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Directory holding the feed snapshots.
    #[arg(long = ARG_RECOMMEND_FEED_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) feed_dir: Option<Utf8PathBuf>,
    /// Number of picks to print (default 5).
    #[arg(long = ARG_RECOMMEND_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Directory holding `<feed id>.json` snapshots.
    pub(crate) feed_dir: Utf8PathBuf,
    /// Number of picks to print.
    pub(crate) top: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match parkpicks_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let feed_dir = args.feed_dir.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_FEED_DIR,
            env: ENV_RECOMMEND_FEED_DIR,
        })?;
        let top = args.top.unwrap_or(DEFAULT_TOP_PICKS);
        if top == 0 {
            return Err(CliError::ZeroPicks {
                field: ARG_RECOMMEND_TOP,
            });
        }
        Ok(Self {
            request_path,
            feed_dir,
            top,
        })
    }
}

/// A recommendation request as read from disk.
///
/// ```json
/// {
///   "park": "Disneyland",
///   "profile": {"current_land": "Fantasyland", "with_kids": true, "hour": 14},
///   "weights": {"same_land": 40.0}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendRequest {
    /// Park to recommend rides in, by name or slug.
    pub park: Park,
    /// Visitor preferences.
    pub profile: PreferenceProfile,
    /// Optional overrides for the scoring contributions.
    #[serde(default)]
    pub weights: Option<RuleWeights>,
}

#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    park: Park,
    hour: u8,
    picks: &'a [ScoredRide],
}

/// Builds the ride source for the current recommend invocation.
pub(crate) trait RideSourceBuilder {
    fn build(&self, config: &RecommendConfig) -> Box<dyn RideSource>;
}

pub(crate) struct FeedDirectoryBuilder;

impl RideSourceBuilder for FeedDirectoryBuilder {
    fn build(&self, config: &RecommendConfig) -> Box<dyn RideSource> {
        Box::new(FeedDirectorySource::new(config.feed_dir.clone()))
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_recommend_with(args, &FeedDirectoryBuilder, writer)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RideSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, builder, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn RideSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = load_recommend_request(&config.request_path)?;
    let catalogue = Catalogue::builtin();
    let mut scorer = RuleScorer::new(catalogue.tables(), catalogue.topology());
    if let Some(weights) = request.weights {
        scorer = scorer.with_weights(weights)?;
    }
    let source = builder.build(config);
    let ranking =
        Recommender::new(scorer).recommend(source.as_ref(), request.park, &request.profile)?;
    let picks = ranking.top_n(config.top);
    info!(
        "{} of {} open rides picked for {}",
        picks.len(),
        ranking.len(),
        request.park
    );
    write_json(
        writer,
        &RecommendOutput {
            park: request.park,
            hour: request.profile.hour().get(),
            picks,
        },
    )
}

/// Loads a JSON-encoded [`RecommendRequest`] from disk.
pub(crate) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}
