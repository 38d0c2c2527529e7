//! Run Controller
//!
//! Sequences scan → select → deploy in one of three modes:
//! 1. Once: deploy one random artifact
//! 2. Continuous: deploy a random artifact, wait a random interval, repeat
//! 3. Components: deploy every artifact whose name was requested
//!
//! Deployments never overlap and are never retried. A failed deployment is
//! reported and the controller moves on to its next unit of work.

use std::sync::Arc;

use chrono::Local;
use rand::Rng;

use crate::domain::entities::{ArtifactDescriptor, Catalog};
use crate::domain::ports::{
    ArtifactSource, DeployBackend, NoopEventSink, RunEvent, RunEventSink, Sleeper,
};
use crate::domain::services::{pick_by_names, pick_random};
use crate::error::{RandeployError, RandeployResult};

use super::settings::RunSettings;
use super::summary::RunSummary;

/// Which run to perform; exactly one per invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Once,
    Continuous,
    Components(Vec<String>),
}

/// Run controller - owns the deployment counter and, in continuous mode,
/// the catalog captured by the first scan.
pub struct RunController<AS, DB, R, SL>
where
    AS: ArtifactSource,
    DB: DeployBackend,
    R: Rng,
    SL: Sleeper,
{
    source: AS,
    backend: DB,
    rng: R,
    sleeper: SL,
    settings: RunSettings,
    events: Arc<dyn RunEventSink>,
    deployment_count: usize,
    catalog: Option<Catalog>,
}

impl<AS, DB, R, SL> RunController<AS, DB, R, SL>
where
    AS: ArtifactSource,
    DB: DeployBackend,
    R: Rng,
    SL: Sleeper,
{
    pub fn new(source: AS, backend: DB, rng: R, sleeper: SL, settings: RunSettings) -> Self {
        Self {
            source,
            backend,
            rng,
            sleeper,
            settings,
            events: Arc::new(NoopEventSink),
            deployment_count: 0,
            catalog: None,
        }
    }

    /// Report progress to `sink` instead of discarding it
    pub fn with_events(mut self, sink: Arc<dyn RunEventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Deployments started so far, across all runs of this controller
    pub fn deployment_count(&self) -> usize {
        self.deployment_count
    }

    pub fn source(&self) -> &AS {
        &self.source
    }

    pub fn backend(&self) -> &DB {
        &self.backend
    }

    pub fn sleeper(&self) -> &SL {
        &self.sleeper
    }

    /// Run `mode` to completion. Continuous mode never returns `Ok` unless
    /// the catalog is empty.
    pub fn run(&mut self, mode: &RunMode) -> RandeployResult<RunSummary> {
        match mode {
            RunMode::Once => self.run_once(),
            RunMode::Continuous => self.run_continuous(None),
            RunMode::Components(names) => self.run_components(names),
        }
    }

    /// Scan, pick one artifact at random, deploy it.
    pub fn run_once(&mut self) -> RandeployResult<RunSummary> {
        let mut summary = RunSummary::default();
        let catalog = self.scan()?;

        let artifact = match pick_random(catalog.artifacts(), &mut self.rng) {
            Ok(artifact) => artifact,
            Err(RandeployError::EmptyCatalog) => {
                self.events.on_event(RunEvent::CatalogEmpty);
                return Ok(summary);
            }
            Err(e) => return Err(e),
        };

        self.deploy_one(artifact, &mut summary);
        Ok(summary)
    }

    /// Scan once, then deploy a random artifact and sleep a random interval,
    /// forever. `max_deployments` stops the loop after that many deployments
    /// (without a trailing sleep).
    pub fn run_continuous(
        &mut self,
        max_deployments: Option<usize>,
    ) -> RandeployResult<RunSummary> {
        let mut summary = RunSummary::default();
        self.events.on_event(RunEvent::ContinuousStarted {
            min: self.settings.interval.min(),
            max: self.settings.interval.max(),
        });

        let catalog = self.scan()?;
        if catalog.is_empty() {
            self.events.on_event(RunEvent::CatalogEmpty);
            return Ok(summary);
        }
        // Captured once; new files added while running are not picked up.
        self.catalog = Some(catalog);

        loop {
            let artifact = {
                let catalog = self.catalog.as_ref().ok_or(RandeployError::EmptyCatalog)?;
                pick_random(catalog.artifacts(), &mut self.rng)?.clone()
            };
            self.deploy_one(&artifact, &mut summary);

            if max_deployments.is_some_and(|max| summary.deployments >= max) {
                return Ok(summary);
            }

            let delay = self.settings.interval.sample(&mut self.rng);
            self.events.on_event(RunEvent::NextScheduled { delay });
            self.sleeper.sleep(delay);
        }
    }

    /// Scan, then deploy every artifact named in `names`, in catalog order.
    pub fn run_components(&mut self, names: &[String]) -> RandeployResult<RunSummary> {
        let mut summary = RunSummary::default();
        let catalog = self.scan()?;

        let selected = pick_by_names(catalog.artifacts(), names);
        if selected.is_empty() {
            self.events.on_event(RunEvent::NoMatches {
                requested: names.to_vec(),
            });
            return Ok(summary);
        }

        self.events.on_event(RunEvent::ListSelected {
            requested: names.to_vec(),
            matched: selected.len(),
        });

        for artifact in selected {
            self.deploy_one(artifact, &mut summary);
        }
        Ok(summary)
    }

    fn scan(&mut self) -> RandeployResult<Catalog> {
        self.events.on_event(RunEvent::ScanStarted {
            root: self.source.root().to_path_buf(),
        });

        let catalog = self.source.scan(&self.settings.kinds)?;

        for counted in catalog.scanned() {
            self.events.on_event(RunEvent::KindScanned {
                kind: counted.kind,
                count: counted.count,
            });
        }
        self.events.on_event(RunEvent::ScanCompleted {
            total: catalog.len(),
        });

        Ok(catalog)
    }

    fn deploy_one(&mut self, artifact: &ArtifactDescriptor, summary: &mut RunSummary) {
        self.deployment_count += 1;
        let number = self.deployment_count;
        let options = self.settings.deploy;

        self.events.on_event(RunEvent::DeployStarted {
            number,
            artifact: artifact.clone(),
            command: self.backend.command_line(artifact, &options),
            dry_run: options.dry_run,
            started_at: Local::now(),
        });

        let outcome = self.backend.deploy(artifact, &options);
        summary.record(&outcome);

        self.events.on_event(RunEvent::DeployFinished {
            number,
            artifact: artifact.clone(),
            outcome,
        });
    }
}
