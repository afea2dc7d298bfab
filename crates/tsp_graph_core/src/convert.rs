//! Instance-to-document conversion pipeline and the batch layer around it.

use std::{
    collections::HashMap,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use rayon::prelude::*;

use crate::{
    Error, Result, document::GraphDocument, graph::Graph, instance, options::ConverterOptions,
};

const INSTANCE_EXTENSION: &str = "tsp";
const DOCUMENT_EXTENSION: &str = "json";

/// Converts the text of one instance file into a complete graph.
pub fn convert_instance_text(text: &str) -> Result<Graph> {
    let nodes = instance::parse_node_coords(text)?;
    Ok(Graph::from_nodes(nodes))
}

/// Reads and converts one instance file.
pub fn convert_instance_file(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    convert_instance_text(&text)
}

/// Outcome of one batch run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every input instance and writes one JSON document per file.
///
/// Inputs are expanded first: directories are scanned, non-recursively, for
/// `.tsp` files, explicit paths are taken as given, and the resulting list
/// is sorted with exact duplicate paths removed. Distinct paths sharing a
/// file name still map to one output document; that collision is warned
/// about, not rejected. Files are converted on a rayon pool sized by
/// `options.threads`. A file that fails to read, parse, or write is logged
/// and counted in `BatchSummary::failed`; the remaining files still convert.
pub fn convert_batch(options: &ConverterOptions) -> Result<BatchSummary> {
    if options.inputs.is_empty() {
        return Err(Error::invalid_input("No input instance files provided"));
    }

    let files = expand_inputs(&options.inputs)?;
    if files.is_empty() {
        return Err(Error::invalid_input(format!(
            "No .{INSTANCE_EXTENSION} files found in the given inputs"
        )));
    }
    warn_on_output_collisions(&files);

    fs::create_dir_all(&options.output_dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|e| Error::other(format!("rayon pool: {e}")))?;

    log::info!(
        "convert: start files={} threads={}",
        files.len(),
        pool.current_num_threads()
    );

    let results: Vec<Result<()>> = pool.install(|| {
        files
            .par_iter()
            .map(|file| convert_one(file, options))
            .collect()
    });

    let mut summary = BatchSummary::default();
    for (file, result) in files.iter().zip(&results) {
        match result {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                log::error!("convert.file: failed path={} err={err}", file.display());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn convert_one(file: &Path, options: &ConverterOptions) -> Result<()> {
    let started = Instant::now();
    log::debug!("convert.file: start path={}", file.display());

    let graph = convert_instance_file(file)?;
    let document = GraphDocument::new(graph);
    let out_path = document_path(&options.output_dir, file);
    fs::write(&out_path, document.to_json_string(options.pretty)?)?;

    log::info!(
        "convert.file: done path={} id={} nodes={} edges={} time={:.2}s",
        file.display(),
        document.graph().id,
        document.graph().node_count(),
        document.graph().edge_count(),
        started.elapsed().as_secs_f32()
    );

    Ok(())
}

/// `<output_dir>/<input file name>.json`. The input file name keeps its
/// extension, so `a280.tsp` maps to `a280.tsp.json`.
fn document_path(output_dir: &Path, input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "instance".to_string());
    output_dir.join(format!("{file_name}.{DOCUMENT_EXTENSION}"))
}

fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in fs::read_dir(input)? {
                let path = entry?.path();
                if path.is_file() && has_instance_extension(&path) {
                    files.push(path);
                }
            }
        } else {
            files.push(input.clone());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Distinct input paths with the same file name write the same document.
fn warn_on_output_collisions(files: &[PathBuf]) {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for file in files {
        if let Some(name) = file.file_name() {
            if let Some(earlier) = seen.insert(name, file) {
                log::warn!(
                    "convert: output name collision path={} earlier={}",
                    file.display(),
                    earlier.display()
                );
            }
        }
    }
}

fn has_instance_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(INSTANCE_EXTENSION))
}
