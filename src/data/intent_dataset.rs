// ============================================================
// Layer 4 — IntentDataset
// ============================================================
// Wraps a split-partitioned dataset and prepares it for intent
// classification. Construction runs, in order:
//
//   1. class extraction   → sorted labels of train + valid,
//                           written to the classes file
//   2. field merge        → fields_to_merge into merged_field
//   3. field split        → field_to_split into split_fields
//   4. preprocessing      → prep_method_name from the registry
//
// All options are checked before step 1, so a bad configuration
// fails without touching the filesystem. Any later failure
// aborts construction.

use std::collections::HashMap;

use crate::data::classes::{class_index, extract_classes};
use crate::data::dataset::SplitView;
use crate::data::fields::{check_split_shape, merge_fields, split_field};
use crate::data::preprocessor::{preprocess_splits, PreprocessorRegistry};
use crate::domain::config::{parse_proportions, split_names, IntentDatasetConfig};
use crate::domain::error::{DatasetError, Result};
use crate::domain::record::SplitMap;
use crate::domain::traits::{SplitSource, TextTransform};
use crate::infra::classes_store::ClassesStore;

#[derive(Debug, Clone, PartialEq)]
struct MergePlan {
    fields: Vec<String>,
    target: String,
}

#[derive(Debug, Clone, PartialEq)]
struct SplitPlan {
    source:      String,
    targets:     Vec<String>,
    proportions: Vec<f64>,
}

/// Treat empty strings the same as an absent option
fn non_empty(opt: &Option<String>) -> Option<&str> {
    opt.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn plan_merge(cfg: &IntentDatasetConfig) -> Result<Option<MergePlan>> {
    let Some(fields) = non_empty(&cfg.fields_to_merge) else {
        return Ok(None);
    };
    let target = non_empty(&cfg.merged_field).ok_or_else(|| {
        DatasetError::config("given fields to merge but no name for the merged field")
    })?;

    Ok(Some(MergePlan {
        fields: split_names(fields),
        target: target.to_string(),
    }))
}

fn plan_split(cfg: &IntentDatasetConfig) -> Result<Option<SplitPlan>> {
    let Some(source) = non_empty(&cfg.field_to_split) else {
        return Ok(None);
    };
    let targets = non_empty(&cfg.split_fields).ok_or_else(|| {
        DatasetError::config("given field to split but no names for the split fields")
    })?;
    let proportions = non_empty(&cfg.split_proportions).ok_or_else(|| {
        DatasetError::config("given field to split but no split proportions")
    })?;

    let plan = SplitPlan {
        source:      source.to_string(),
        targets:     split_names(targets),
        proportions: parse_proportions(proportions)?,
    };
    check_split_shape(&plan.source, &plan.targets, &plan.proportions)?;
    Ok(Some(plan))
}

/// A dataset prepared for intent classification.
#[derive(Debug, Clone)]
pub struct IntentDataset {
    data:             SplitMap,
    seed:             Option<u64>,
    classes:          Option<Vec<String>>,
    prep_method_name: Option<String>,
}

impl IntentDataset {
    /// Build from `base` according to `config`. Preprocessor names are
    /// resolved in `registry`. The config seed, when set, overrides the
    /// seed of `base`.
    pub fn new(
        base:     &impl SplitSource,
        config:   &IntentDatasetConfig,
        registry: &PreprocessorRegistry,
    ) -> Result<Self> {
        let merge = plan_merge(config)?;
        let split = plan_split(config)?;
        let prep  = non_empty(&config.prep_method_name)
            .map(|name| registry.get(name).map(|t| (name, t)))
            .transpose()?;

        let mut dataset = Self {
            data:             base.data().clone(),
            seed:             config.seed.or(base.seed()),
            classes:          None,
            prep_method_name: prep.map(|(name, _)| name.to_string()),
        };

        if config.extract_classes {
            let classes = extract_classes(&dataset)?;
            let store   = ClassesStore::new(config.classes_path());
            tracing::info!("Classes are saved to file '{}'", store.path().display());
            store.save(&classes)?;
            dataset.classes = Some(classes);
        }

        if let Some(plan) = merge {
            tracing::info!("Merging fields {:?} to new field '{}'", plan.fields, plan.target);
            merge_fields(&mut dataset.data, &plan.fields, &plan.target)?;
        }

        if let Some(plan) = split {
            tracing::info!("Splitting field '{}' to new fields {:?}", plan.source, plan.targets);
            split_field(
                &mut dataset.data,
                &plan.source,
                &plan.targets,
                &plan.proportions,
                dataset.seed,
            )?;
        }

        if let Some((name, transform)) = prep {
            tracing::info!("Preprocessing all splits with '{}'", name);
            dataset.data = dataset.preprocess(name, transform)?;
        }

        Ok(dataset)
    }

    /// Run `transform` over every split and return the result as a new
    /// split map. The dataset itself is left unchanged.
    pub fn preprocess(&self, name: &str, transform: &dyn TextTransform) -> Result<SplitMap> {
        preprocess_splits(&self.data, name, transform)
    }

    /// Extracted classes, `None` when extraction was switched off
    pub fn classes(&self) -> Option<&[String]> {
        self.classes.as_deref()
    }

    /// Class → index map for label encoding. Empty without classes.
    pub fn class_index(&self) -> HashMap<String, usize> {
        self.classes().map(class_index).unwrap_or_default()
    }

    pub fn prep_method_name(&self) -> Option<&str> {
        self.prep_method_name.as_deref()
    }

    /// One split as a Burn dataset
    pub fn split_view(&self, split: &str) -> SplitView {
        SplitView::of(self, split)
    }

    pub fn into_data(self) -> SplitMap {
        self.data
    }
}

impl SplitSource for IntentDataset {
    fn data(&self) -> &SplitMap { &self.data }

    fn seed(&self) -> Option<u64> { self.seed }
}
