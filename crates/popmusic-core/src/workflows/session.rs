use crate::core::io::discovery::ResultFiles;
use crate::core::models::record::ResidueKey;
use crate::core::models::results::ParsedResultSet;
use crate::engine::annotation::copy_attributes;
use crate::engine::config::SessionConfig;
use crate::engine::criteria::Criteria;
use crate::engine::error::EngineError;
use crate::engine::host::HostStructure;
use crate::engine::mutation::{self, AppliedMutation, RotamerPlacer};
use crate::engine::progress::ProgressReporter;
use crate::engine::selection::{FavourableMutation, select_favourable_mutations};
use crate::engine::validation::validate;
use std::path::Path;
use tracing::{info, instrument, warn};

/// PoPMuSiC results bound to the host structure they were validated against.
///
/// Holding the structure's mutable borrow for the whole session guarantees it cannot
/// change between validation and the annotation or mutation steps that rely on it.
pub struct Session<'s, S: HostStructure + ?Sized> {
    results: ParsedResultSet,
    structure: &'s mut S,
    config: SessionConfig,
}

impl<'s, S: HostStructure + ?Sized> Session<'s, S> {
    /// Loads the result files, validates them against `structure` and annotates it.
    #[instrument(skip_all, name = "popmusic_session")]
    pub fn open(
        files: &ResultFiles,
        structure: &'s mut S,
        config: SessionConfig,
    ) -> Result<Self, EngineError> {
        info!(
            "Loading PoPMuSiC results from {:?} and {:?}",
            files.summary, files.detail
        );
        let results = files.load()?;
        Self::attach(results, structure, config)
    }

    /// Same as [`Session::open`], locating the `.pops`/`.pop` pair inside `directory`.
    pub fn open_directory(
        directory: impl AsRef<Path>,
        structure: &'s mut S,
        config: SessionConfig,
    ) -> Result<Self, EngineError> {
        let files = ResultFiles::discover(directory)?;
        Self::open(&files, structure, config)
    }

    /// Binds already-parsed results to `structure`, validating and annotating it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the residue count or sequence differs;
    /// the structure is not modified in that case.
    pub fn attach(
        results: ParsedResultSet,
        structure: &'s mut S,
        config: SessionConfig,
    ) -> Result<Self, EngineError> {
        validate(&results, &*structure)?;
        info!(
            "Validated {} residue records against the structure.",
            results.len()
        );

        let mut session = Self {
            results,
            structure,
            config,
        };
        session.copy_attributes();
        Ok(session)
    }

    pub fn results(&self) -> &ParsedResultSet {
        &self.results
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn structure(&self) -> &S {
        &*self.structure
    }

    /// Writes the numeric fields of every record onto the matching host residue.
    pub fn copy_attributes(&mut self) {
        copy_attributes(
            &self.results,
            &mut *self.structure,
            &self.config.annotation_prefix,
        );
    }

    pub fn favourable_mutations(&self) -> Vec<FavourableMutation<'_>> {
        select_favourable_mutations(&self.results, self.config.selection_mode)
    }

    /// Applies one chosen substitution, typically picked from the candidate table.
    ///
    /// `key` uses the PoPMuSiC numbering; the host residue is the one paired with that
    /// record during validation, whatever number the host gives it.
    pub fn apply_mutation<P>(
        &mut self,
        key: &ResidueKey,
        mutant: &str,
        criteria: &Criteria,
        placer: &mut P,
    ) -> Result<AppliedMutation, EngineError>
    where
        P: RotamerPlacer<S::Residue> + ?Sized,
    {
        let not_found = || EngineError::ResidueNotFound { key: key.clone() };
        let index = self
            .results
            .index_of(&key.chain, key.position)
            .ok_or_else(not_found)?;
        let record = self.results.get(index).ok_or_else(not_found)?;
        let candidate = record.mutation(mutant).copied();
        if candidate.is_none() {
            warn!("{} has no predicted value for {}; applying anyway.", key, mutant);
        }

        let residue = self.structure.residue_mut(index).ok_or_else(not_found)?;
        mutation::apply_mutation(residue, mutant, criteria, placer)?;

        Ok(AppliedMutation {
            key: key.clone(),
            wild_type: record.residue_type.clone(),
            mutant: mutant.to_string(),
            candidate,
        })
    }

    /// Applies the favourable mutations selected by the configured mode and criteria.
    pub fn apply_favourable_mutations<P>(
        &mut self,
        placer: &mut P,
        reporter: &ProgressReporter,
    ) -> Result<Vec<AppliedMutation>, EngineError>
    where
        P: RotamerPlacer<S::Residue> + ?Sized,
    {
        let applied = mutation::apply_favourable_mutations(
            &self.results,
            &mut *self.structure,
            self.config.selection_mode,
            &self.config.criteria,
            placer,
            reporter,
        )?;
        info!("Applied {} mutation(s).", applied.len());
        Ok(applied.iter().map(AppliedMutation::from).collect())
    }

    pub fn into_results(self) -> ParsedResultSet {
        self.results
    }
}
