//! Documentation-step extraction from flattened keyword invocations.
use crate::artifact::Step;
use crate::output_xml::KeywordInvocation;
use crate::paths::RunPaths;
use crate::timestamp::parse_time_ms;

/// Keyword names that mark a documented step.
pub const DOC_KEYWORDS: [&str; 2] = ["Doc Web Step", "Doc Desktop Step"];

const PASS_STATUS: &str = "PASS";

/// Fold state for one extraction pass.
#[derive(Debug, Default)]
struct StepAccumulator {
    matched: usize,
    steps: Vec<Step>,
}

impl StepAccumulator {
    fn push(mut self, keyword: &KeywordInvocation, paths: &RunPaths) -> Self {
        if !is_doc_step(keyword) {
            return self;
        }
        // Every match consumes a number, even when the id comes from args.
        self.matched += 1;
        let step = build_step(keyword, self.matched, paths);
        tracing::debug!(id = %step.id, title = %step.title, "doc step extracted");
        self.steps.push(step);
        self
    }
}

/// Build steps for every passing documentation keyword, in encounter order.
pub fn extract_steps(keywords: &[KeywordInvocation], paths: &RunPaths) -> Vec<Step> {
    keywords
        .iter()
        .fold(StepAccumulator::default(), |acc, keyword| {
            acc.push(keyword, paths)
        })
        .steps
}

fn is_doc_step(keyword: &KeywordInvocation) -> bool {
    keyword.status == PASS_STATUS && DOC_KEYWORDS.contains(&keyword.name.as_str())
}

fn build_step(keyword: &KeywordInvocation, ordinal: usize, paths: &RunPaths) -> Step {
    let arg = |index: usize| {
        keyword
            .args
            .get(index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    };

    let id = arg(0)
        .map(str::to_string)
        .unwrap_or_else(|| format!("step-{ordinal}"));
    let title = arg(1).map(str::to_string).unwrap_or_else(|| id.clone());
    let description = arg(2).map(str::to_string);
    let image_path = paths.screenshot_path(&id).to_string_lossy().into_owned();

    let started_at_ms = parse_time_ms(keyword.start_time.as_deref());
    let ended_at_ms = started_at_ms.and_then(|start| start.checked_add(keyword.elapsed_ms));

    Step {
        id,
        title,
        image_path,
        description,
        started_at_ms,
        ended_at_ms,
    }
}
