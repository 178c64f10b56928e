use atrium_core::filter::ResearchFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium research`.
pub async fn handle(args: &ResearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(args);
    let results = ctx.service.query_research(&filter).await?;
    if results.is_empty() && !flags.quiet {
        tracing::info!("no research projects match the filter");
    }
    output(&results, flags.format)
}

fn build_filter(args: &ResearchArgs) -> ResearchFilter {
    ResearchFilter {
        category: args.category.clone(),
        client: args.client.clone(),
        start_date: args.from,
        end_date: args.to,
        search_term: args.search.clone(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_map_onto_filter_dimensions() {
        let args = ResearchArgs {
            category: Some("Imaging".into()),
            client: None,
            from: NaiveDate::from_ymd_opt(2025, 1, 1),
            to: None,
            search: Some("scanner".into()),
        };
        assert_eq!(
            build_filter(&args),
            ResearchFilter::all()
                .with_category("Imaging")
                .with_start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
                .with_search_term("scanner")
        );
    }

    #[test]
    fn no_flags_is_unconstrained() {
        let args = ResearchArgs {
            category: None,
            client: None,
            from: None,
            to: None,
            search: None,
        };
        assert!(build_filter(&args).is_unconstrained());
    }
}
