// src/planner.rs
use crate::anchors::Anchors;
use crate::buffer::NamedOutputs;
use crate::config::PlannerParams;
use crate::devices;
use crate::error::PlannerError;
use crate::sections::{SectionContext, SectionFn, SectionKind, SectionRegistry, run_section};
use chrono::Weekday;
use log::info;
use plannergen_calendar::Year;
use plannergen_executor::{Executor, ExecutorImpl};
use plannergen_types::Layout;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Collects planner parameters. Nothing is checked until [`PlannerBuilder::build`].
pub struct PlannerBuilder {
    params: PlannerParams,
    registry: SectionRegistry,
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self {
            params: PlannerParams::default(),
            registry: SectionRegistry::months_on_sides(),
        }
    }
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces all parameters, e.g. with ones read by [`PlannerParams::from_json_file`].
    pub fn with_params(mut self, params: PlannerParams) -> Self { self.params = params; self }

    pub fn with_device(mut self, device: impl Into<String>) -> Self { self.params.device = device.into(); self }

    pub fn with_year(mut self, year: i32) -> Self { self.params.year = year; self }

    pub fn with_first_weekday(mut self, weekday: Weekday) -> Self { self.params.first_weekday = weekday; self }

    /// Sections to render, in output order.
    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.enabled_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Registered sections that are intentionally not rendered.
    pub fn with_disabled_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.disabled_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Marks every registered section that is not enabled as disabled.
    pub fn disable_remaining(mut self) -> Self {
        let enabled: BTreeSet<&str> = self.params.enabled_sections.iter().map(String::as_str).collect();
        self.params.disabled_sections = self
            .registry
            .kinds()
            .map(SectionKind::as_str)
            .filter(|name| !enabled.contains(name))
            .map(String::from)
            .collect();
        self
    }

    pub fn with_registry(mut self, registry: SectionRegistry) -> Self { self.registry = registry; self }

    /// Runs sections on the rayon pool when the `rayon-executor` feature is on.
    pub fn with_parallel(mut self, parallel: bool) -> Self { self.params.parallel = parallel; self }

    /// Validates the configuration and resolves device, calendar and sections.
    pub fn build(self) -> Result<Planner, PlannerError> {
        let PlannerBuilder { params, registry } = self;
        params.validate()?;

        let layout = devices::resolve(&params.device)?;
        let year = Year::new(params.year, params.first_weekday)?;

        let mut sections: Vec<(SectionKind, SectionFn)> = Vec::with_capacity(params.enabled_sections.len());
        for name in &params.enabled_sections {
            let kind: SectionKind = name.parse()?;
            let producer = registry
                .get(kind)
                .ok_or_else(|| PlannerError::UnknownSection(name.clone()))?;
            if sections.iter().any(|(seen, _)| *seen == kind) {
                return Err(PlannerError::DuplicateSection(name.clone()));
            }
            sections.push((kind, producer));
        }

        let mut accounted: BTreeSet<SectionKind> = sections.iter().map(|(kind, _)| *kind).collect();
        for name in &params.disabled_sections {
            accounted.insert(name.parse()?);
        }
        if let Some(missing) = registry.kinds().find(|kind| !accounted.contains(kind)) {
            return Err(PlannerError::MissingSection(missing));
        }

        let executor = ExecutorImpl::with_parallelism(params.parallel);
        info!(
            "Planner for {} on '{}' with {} sections using {}.",
            year.number(),
            layout.device,
            sections.len(),
            executor.name()
        );

        let anchors = Anchors::new(sections.iter().map(|(kind, _)| *kind));
        let context = Arc::new(SectionContext {
            layout,
            year,
            params,
            anchors,
        });

        Ok(Planner {
            context,
            sections,
            executor,
        })
    }
}

/// A validated planner, ready to generate.
#[derive(Debug)]
pub struct Planner {
    context: Arc<SectionContext>,
    sections: Vec<(SectionKind, SectionFn)>,
    executor: ExecutorImpl,
}

impl Planner {
    pub fn builder() -> PlannerBuilder {
        PlannerBuilder::new()
    }

    pub fn layout(&self) -> &Layout {
        &self.context.layout
    }

    pub fn year(&self) -> &Year {
        &self.context.year
    }

    pub fn params(&self) -> &PlannerParams {
        &self.context.params
    }

    /// Enabled sections in output order.
    pub fn enabled(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|(kind, _)| *kind).collect()
    }

    /// Name of the executor sections run on.
    pub fn executor_name(&self) -> &'static str {
        self.executor.name()
    }

    /// Builds every enabled section. Outputs follow the enabled order no matter
    /// which section finished first; the first failing section aborts the run.
    pub fn build_data(&self) -> Result<NamedOutputs, PlannerError> {
        let context = Arc::clone(&self.context);
        let results = self.executor.execute_all(self.sections.clone(), move |(kind, producer)| {
            run_section(kind, producer, &context)
        });

        let outputs = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        let outputs = NamedOutputs::new(outputs);
        info!(
            "Built {} sections, {} pages.",
            outputs.len(),
            outputs.page_count()
        );
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(sections: &[&str]) -> PlannerBuilder {
        Planner::builder()
            .with_year(2024)
            .with_sections(sections.iter().copied())
            .disable_remaining()
    }

    #[test]
    fn defaults_enable_every_section() {
        let planner = Planner::builder().with_year(2024).build().unwrap();
        assert_eq!(planner.enabled(), SectionKind::ALL.to_vec());
        assert_eq!(planner.layout().device, "supernote_a5x");
    }

    #[test]
    fn unknown_and_duplicate_sections() {
        assert!(matches!(
            only(&["title", "weekly"]).build(),
            Err(PlannerError::UnknownSection(name)) if name == "weekly"
        ));
        assert!(matches!(
            only(&["title", "annual", "title"]).build(),
            Err(PlannerError::DuplicateSection(name)) if name == "title"
        ));
    }

    #[test]
    fn omitted_section_is_reported() {
        let result = Planner::builder()
            .with_year(2024)
            .with_sections(["title", "annual"])
            .with_disabled_sections(["quarterlies", "monthlies", "weeklies", "dailies", "daily_notes", "todo"])
            .build();
        assert!(matches!(result, Err(PlannerError::MissingSection(SectionKind::Notes))));
    }

    #[test]
    fn unregistered_section_is_unknown() {
        let registry = SectionRegistry::months_on_sides();
        let title = registry.get(SectionKind::Title).unwrap();
        let result = Planner::builder()
            .with_registry(SectionRegistry::empty().register(SectionKind::Title, title))
            .with_sections(["title", "annual"])
            .build();
        assert!(matches!(result, Err(PlannerError::UnknownSection(name)) if name == "annual"));
    }

    #[test]
    fn invalid_params_fail_before_anything_is_built() {
        let mut params = PlannerParams::default();
        params.daily.schedule_from = 20;
        params.daily.schedule_to = 8;
        let err = Planner::builder().with_params(params).build().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn anchors_follow_enabled_sections() {
        let planner = only(&["monthlies"]).build().unwrap();
        let outputs = planner.build_data().unwrap();
        let tex = outputs.get(SectionKind::Monthlies).unwrap().as_str().unwrap();
        assert!(!tex.contains("\\hyperlink{year-2024}"));
        assert!(!tex.contains("\\hyperlink{2024-02-29}"));
        assert!(tex.contains("\\hyperlink{2024-02}{Feb}"));
    }
}
