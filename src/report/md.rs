use crate::pagination::{page_query, PaginationWindow};
use crate::types::report::{DashboardReport, ItemScore, LatestArticle, PurgeOutcome};

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn dashboard_markdown(report: &DashboardReport) -> String {
    let mut output = String::new();
    output.push_str("# SEO Dashboard\n\n");

    if let Some(error) = &report.error {
        output.push_str(&format!("> error: {error}\n\n"));
    }

    output.push_str("## Statistics\n\n");
    output.push_str(&format!(
        "- published: {}\n- drafts: {}\n- average SEO score: {}/100\n\n",
        report.stats.total_published, report.stats.total_drafts, report.stats.average_seo_score
    ));

    output.push_str("## Content\n\n");
    if report.content.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| ID | Title | Type | Author | Status | Updated | SEO |\n");
        output.push_str("|---|---|---|---|---|---|---|\n");
        for item in &report.content {
            output.push_str(&format!(
                "| {} | [{}]({}) | {} | {} | {} | {} | {} |\n",
                item.id,
                escape_cell(&item.title),
                item.url,
                item.content_type,
                escape_cell(&item.author),
                item.status.label(),
                item.changed.format(DATE_FORMAT),
                item.seo_score
            ));
        }
        output.push('\n');
    }

    if let Some(window) = &report.pagination {
        output.push_str(&pagination_markdown(window));
    }

    output
}

fn pagination_markdown(window: &PaginationWindow) -> String {
    if window.total_pages == 0 {
        return "Showing 0 items\n".to_string();
    }

    let mut output = format!(
        "Showing {}-{} of {} (page {} of {})\n\n",
        window.start_item,
        window.end_item,
        window.total_items,
        window.current_page + 1,
        window.total_pages
    );

    let link = |label: &str, page: Option<usize>| match page {
        Some(page) => format!("[{label}]({})", page_query(page, window.items_per_page)),
        None => label.to_string(),
    };

    let mut parts = Vec::new();
    parts.push(link("first", window.first));
    parts.push(link("previous", window.previous));
    for entry in &window.pages {
        if entry.current {
            parts.push(format!("**{}**", entry.number));
        } else {
            parts.push(link(&entry.number.to_string(), Some(entry.page)));
        }
    }
    parts.push(link("next", window.next));
    parts.push(link("last", window.last));

    output.push_str(&parts.join(" "));
    output.push('\n');
    output
}

pub fn latest_markdown(articles: &[LatestArticle]) -> String {
    let mut output = String::from("# Latest Articles\n\n");
    if articles.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for article in articles {
        output.push_str(&format!(
            "- [{}]({}) ({}, SEO {}/100)\n",
            article.title,
            article.url,
            article.created.format(DATE_FORMAT),
            article.seo_score
        ));
        if !article.summary.is_empty() {
            output.push_str(&format!("  {}\n", article.summary));
        }
    }
    output
}

pub fn scores_markdown(scores: &[ItemScore]) -> String {
    let mut output = String::from("# SEO Scores\n\n");
    if scores.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for entry in scores {
        let parts = &entry.breakdown;
        output.push_str(&format!(
            "## {} (#{}): {}/100\n\n- title: {}\n- body: {}\n- alias: {}\n- meta_description: {}\n- images: {}\n- tags: {}\n\n",
            entry.title,
            entry.id,
            entry.seo_score,
            parts.title,
            parts.body,
            parts.alias,
            parts.meta_description,
            parts.images,
            parts.tags
        ));
    }
    output
}

pub fn purge_markdown(outcome: &PurgeOutcome) -> String {
    let state = if outcome.success { "ok" } else { "failed" };
    format!("purge {state} at {}: {}", outcome.timestamp, outcome.message)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
