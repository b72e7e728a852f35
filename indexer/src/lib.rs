use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches, Parser, Subcommand, ValueEnum};
use invidx_core::tokenizer::tokenize;
use invidx_core::{build_inverted_index, dump_index, load_documents_from_path, load_index, InvertedIndex, PostingList, StoragePolicy};
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "invidx")]
#[command(about = "Build, dump and query an inverted index", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the index from a `<id>\t<text>` dataset and dump it
    Build {
        /// Dataset path, one document per line
        #[arg(short, long)]
        dataset: PathBuf,
        /// Output index path
        #[arg(short, long)]
        output: PathBuf,
        /// Storage policy: text (json) or binary (struct)
        #[arg(short, long, env = "INVIDX_STRATEGY", default_value = "binary")]
        strategy: String,
    },
    /// Load a dumped index and run conjunctive queries against it
    Query {
        /// Path to the dumped index
        #[arg(long)]
        index: PathBuf,
        /// Storage policy the index was dumped with
        #[arg(short, long, env = "INVIDX_STRATEGY", default_value = "binary")]
        strategy: String,
        #[command(flatten)]
        query: QueryGroups,
        /// File with one query per line, `-` for stdin
        #[arg(long)]
        query_file: Option<PathBuf>,
        /// Encoding of the query file
        #[arg(long, value_enum, default_value_t = QueryEncoding::Utf8)]
        encoding: QueryEncoding,
    },
}

/// Words of each `--query` occurrence, kept apart: `--query a b --query c`
/// is two queries, `[a, b]` and `[c]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryGroups(pub Vec<Vec<String>>);

const QUERY_ARG: &str = "query";

impl FromArgMatches for QueryGroups {
    fn from_arg_matches(matches: &ArgMatches) -> std::result::Result<Self, clap::Error> {
        let groups = matches
            .get_occurrences::<String>(QUERY_ARG)
            .map(|occurrences| occurrences.map(|words| words.cloned().collect()).collect())
            .unwrap_or_default();
        Ok(Self(groups))
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> std::result::Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl Args for QueryGroups {
    fn augment_args(cmd: Command) -> Command {
        cmd.arg(
            Arg::new(QUERY_ARG)
                .long(QUERY_ARG)
                .help("Query words; repeat the flag for several queries")
                .value_name("WORD")
                .num_args(1..)
                .action(ArgAction::Append)
                .required_unless_present("query_file")
                .conflicts_with("query_file"),
        )
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEncoding {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "cp1251", alias = "windows-1251")]
    Cp1251,
}

impl QueryEncoding {
    /// Strict decode: malformed input is an error, never replaced.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let encoding = match self {
            QueryEncoding::Utf8 => encoding_rs::UTF_8,
            QueryEncoding::Cp1251 => encoding_rs::WINDOWS_1251,
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| anyhow!("query file is not valid {self}"))
    }
}

impl fmt::Display for QueryEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryEncoding::Utf8 => f.write_str("utf-8"),
            QueryEncoding::Cp1251 => f.write_str("cp1251"),
        }
    }
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Build { dataset, output, strategy } => {
            let policy: StoragePolicy = strategy.parse()?;
            build(&dataset, &output, policy)?;
            Ok(())
        }
        Commands::Query { index: index_path, strategy, query, query_file, encoding } => {
            let policy: StoragePolicy = strategy.parse()?;
            let index = load_index(&index_path, policy)
                .with_context(|| format!("loading index {}", index_path.display()))?;
            let queries: Vec<Vec<String>> = match query_file {
                Some(path) => {
                    let text = read_query_file(&path, encoding)?;
                    text.lines().map(parse_query).collect()
                }
                None => query.0.iter().map(|words| parse_query(&words.join(" "))).collect(),
            };
            run_queries(&index, &queries, out)
        }
    }
}

pub fn build(dataset: &Path, output: &Path, policy: StoragePolicy) -> Result<InvertedIndex> {
    let documents = load_documents_from_path(dataset).with_context(|| format!("loading dataset {}", dataset.display()))?;
    let index = build_inverted_index(&documents);
    tracing::info!(num_docs = documents.len(), num_words = index.len(), "indexed dataset");
    dump_index(&index, output, policy).with_context(|| format!("dumping index to {}", output.display()))?;
    Ok(index)
}

/// Lower-case and tokenize a raw query the way documents are indexed.
pub fn parse_query(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    tokenize(&lowered).into_iter().map(str::to_string).collect()
}

pub fn run_queries<W: Write>(index: &InvertedIndex, queries: &[Vec<String>], out: &mut W) -> Result<()> {
    for words in queries {
        let result = index.query(words.as_slice());
        tracing::debug!(?words, hits = result.len(), "query");
        writeln!(out, "{}", format_result(&result))?;
    }
    Ok(())
}

/// `2,3` style line; an empty result renders as an empty string.
pub fn format_result(result: &PostingList) -> String {
    result.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

fn read_query_file(path: &Path, encoding: QueryEncoding) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("reading queries from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("reading query file {}", path.display()))?
    };
    encoding.decode(&bytes)
}
