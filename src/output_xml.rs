//! Robot Framework `output.xml` loading.
//!
//! The result tree is flattened into an ordered list of keyword invocations.
//! Order follows the end of each `<kw>` element, so nested keywords come
//! before the keyword that contains them.
use crate::timestamp::parse_time_ms;
use anyhow::{Context, Result};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

/// One recorded keyword execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInvocation {
    pub name: String,
    pub status: String,
    pub args: Vec<String>,
    pub start_time: Option<String>,
    pub elapsed_ms: i64,
}

/// The parts of a run result the converter needs.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    pub suite_name: Option<String>,
    pub keywords: Vec<KeywordInvocation>,
}

/// Read and flatten an `output.xml` file.
pub fn load_output_xml(path: &Path) -> Result<ExecutionResult> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let result =
        parse_output_xml(&text).with_context(|| format!("parse {}", path.display()))?;
    tracing::info!(
        suite = result.suite_name.as_deref().unwrap_or_default(),
        keywords = result.keywords.len(),
        "result tree loaded"
    );
    Ok(result)
}

/// Flatten `output.xml` content already in memory.
pub fn parse_output_xml(text: &str) -> Result<ExecutionResult> {
    let doc = Document::parse(text).context("parse output XML")?;
    let root = doc.root_element();

    let suite_name = root
        .children()
        .find(|node| node.has_tag_name("suite"))
        .and_then(|suite| suite.attribute("name"))
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let mut keywords = Vec::new();
    collect_keywords(root, &mut keywords);
    Ok(ExecutionResult {
        suite_name,
        keywords,
    })
}

fn collect_keywords(node: Node<'_, '_>, out: &mut Vec<KeywordInvocation>) {
    for child in node.children().filter(Node::is_element) {
        collect_keywords(child, out);
        if child.has_tag_name("kw") {
            out.push(keyword_from_node(child));
        }
    }
}

fn keyword_from_node(node: Node<'_, '_>) -> KeywordInvocation {
    let args = keyword_args(node);

    let status = node.children().find(|child| child.has_tag_name("status"));
    let (status, start_time, elapsed_ms) = match status {
        Some(status) => {
            let (start_time, elapsed_ms) = status_timing(status);
            (
                status.attribute("status").unwrap_or_default().to_string(),
                start_time,
                elapsed_ms,
            )
        }
        None => (String::new(), None, 0),
    };

    KeywordInvocation {
        name: node.attribute("name").unwrap_or_default().to_string(),
        status,
        args,
        start_time,
        elapsed_ms,
    }
}

/// Collect `<arg>` text, direct or wrapped in RF 3's `<arguments>`.
fn keyword_args(node: Node<'_, '_>) -> Vec<String> {
    node.children()
        .flat_map(|child| {
            let wrapped = child
                .has_tag_name("arguments")
                .then(|| child.children())
                .into_iter()
                .flatten();
            std::iter::once(child).chain(wrapped)
        })
        .filter(|child| child.has_tag_name("arg"))
        .map(|arg| arg.text().unwrap_or_default().to_string())
        .collect()
}

/// Read start text and elapsed milliseconds from either status layout.
///
/// RF 3-6 write `starttime`/`endtime`; RF 7 writes ISO `start` plus
/// `elapsed` seconds.
fn status_timing(status: Node<'_, '_>) -> (Option<String>, i64) {
    if let Some(start) = status.attribute("start") {
        let start_time = start.replacen('T', " ", 1);
        let elapsed_ms = status
            .attribute("elapsed")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite())
            .map(|seconds| (seconds * 1000.0).round() as i64)
            .unwrap_or(0);
        return (Some(start_time), elapsed_ms);
    }

    let start_time = status.attribute("starttime").map(str::to_string);
    let start_ms = parse_time_ms(start_time.as_deref());
    let end_ms = parse_time_ms(status.attribute("endtime"));
    let elapsed_ms = match (start_ms, end_ms) {
        (Some(start), Some(end)) => end - start,
        _ => 0,
    };
    (start_time, elapsed_ms)
}

#[cfg(test)]
#[path = "output_xml_tests.rs"]
mod tests;
