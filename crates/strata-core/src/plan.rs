//! The static, ordered deployment plan
//!
//! Order encodes layer dependencies: database and schema objects before
//! tables, tables before streams, streams before procedures, procedures
//! before scheduled tasks, and everything before governance policies.

use std::fmt;

/// Warehouse layer a step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Roles, database, schemas, warehouse
    Setup,
    /// Storage integration, file formats, stages
    Ingestion,
    /// Raw landed data
    Bronze,
    /// Cleaned and conformed data
    Silver,
    /// Business metrics
    Gold,
    /// Masking and row access policies
    Governance,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Setup => "setup",
            Layer::Ingestion => "ingestion",
            Layer::Bronze => "bronze",
            Layer::Silver => "silver",
            Layer::Gold => "gold",
            Layer::Governance => "governance",
        };
        f.write_str(name)
    }
}

/// One SQL resource to apply, relative to the resource root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentStep {
    /// Path relative to the resource root
    pub path: &'static str,

    /// Human-readable description for progress output
    pub description: &'static str,

    /// Layer the resource belongs to
    pub layer: Layer,
}

impl DeploymentStep {
    /// Create a new step
    pub const fn new(layer: Layer, path: &'static str, description: &'static str) -> Self {
        Self {
            path,
            description,
            layer,
        }
    }
}

/// Full deployment plan, applied strictly in this order
pub static DEPLOYMENT_PLAN: &[DeploymentStep] = &[
    // Database setup
    DeploymentStep::new(
        Layer::Setup,
        "sql/00_database_setup/01_create_roles.sql",
        "Creating roles",
    ),
    DeploymentStep::new(
        Layer::Setup,
        "sql/00_database_setup/02_create_database.sql",
        "Creating database",
    ),
    DeploymentStep::new(
        Layer::Setup,
        "sql/00_database_setup/03_create_schemas.sql",
        "Creating schemas",
    ),
    DeploymentStep::new(
        Layer::Setup,
        "sql/00_database_setup/04_create_warehouse.sql",
        "Creating warehouse",
    ),
    // Ingestion setup
    DeploymentStep::new(
        Layer::Ingestion,
        "sql/01_ingestion_setup/00_create_storage_integration.sql",
        "Setting up storage integration",
    ),
    DeploymentStep::new(
        Layer::Ingestion,
        "sql/01_ingestion_setup/01_create_file_format.sql",
        "Creating file format",
    ),
    DeploymentStep::new(
        Layer::Ingestion,
        "sql/01_ingestion_setup/02_create_stage.sql",
        "Creating stage",
    ),
    // Bronze
    DeploymentStep::new(
        Layer::Bronze,
        "sql/02_bronze/00_create_bronze_tables.sql",
        "Creating bronze tables",
    ),
    DeploymentStep::new(
        Layer::Bronze,
        "sql/02_bronze/01_create_bronze_streams.sql",
        "Creating bronze streams",
    ),
    DeploymentStep::new(
        Layer::Bronze,
        "sql/02_bronze/02_procedure_load_bronze_data.sql",
        "Creating bronze procedures",
    ),
    DeploymentStep::new(
        Layer::Bronze,
        "sql/02_bronze/03_create_daily_load_task.sql",
        "Creating bronze tasks",
    ),
    // Silver
    DeploymentStep::new(
        Layer::Silver,
        "sql/03_silver/00_create_silver_tables.sql",
        "Creating silver tables",
    ),
    DeploymentStep::new(
        Layer::Silver,
        "sql/03_silver/01_create_silver_streams.sql",
        "Creating silver streams",
    ),
    DeploymentStep::new(
        Layer::Silver,
        "sql/03_silver/02_procedure_bronze_to_silver.sql",
        "Creating silver procedures",
    ),
    DeploymentStep::new(
        Layer::Silver,
        "sql/03_silver/03_task_bronze_to_silver.sql",
        "Creating silver tasks",
    ),
    // Gold
    DeploymentStep::new(
        Layer::Gold,
        "sql/04_gold/create_metrics_tables.sql",
        "Creating gold tables",
    ),
    DeploymentStep::new(
        Layer::Gold,
        "sql/04_gold/01_procedure_silver_to_gold.sql",
        "Creating gold procedures",
    ),
    DeploymentStep::new(
        Layer::Gold,
        "sql/04_gold/02_task_gold_metrics.sql",
        "Creating gold tasks",
    ),
    // Governance
    DeploymentStep::new(
        Layer::Governance,
        "sql/06_governance/masking_policies.sql",
        "Creating masking policies",
    ),
    DeploymentStep::new(
        Layer::Governance,
        "sql/06_governance/row_access_policies.sql",
        "Creating RLS policies",
    ),
];

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
