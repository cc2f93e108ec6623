//! The catalog/labs toolbox exposed to the host runtime.

use catalog_ox::{Catalog, DEFAULT_MAX_PAGES, ModelListQuery};
use futures_util::future::BoxFuture;
use labs_ox::Labs;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::tool::{
    FunctionMetadata, ToolBox, ToolError, ToolOutput, ToolSet, ToolUse, schema_for_type,
};

/// Tool name: paginated, filtered catalog listing.
pub const LIST_MODELS: &str = "list_models";
/// Tool name: code sample for a model served through GitHub.
pub const GITHUB_MODEL_CODE_SAMPLE: &str = "github_model_code_sample";
/// Tool name: implementation sample for an experimental labs project.
pub const LABS_PROJECT_CODE_SAMPLE: &str = "labs_project_code_sample";
/// Tool name: listing of the experimental labs projects.
pub const LIST_LABS_PROJECTS: &str = "list_labs_projects";

/// Arguments of [`LIST_MODELS`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ListModelsArgs {
    /// Only return models usable in the free playground.
    pub free_playground: bool,
    /// Substring match on the publisher name.
    pub publisher_name: Option<String>,
    /// Substring match on the license name.
    pub license_name: Option<String>,
    /// Exact match on the model name.
    pub model_name: Option<String>,
    /// Upper bound on catalog pages fetched for this listing.
    pub max_pages: u32,
}

impl Default for ListModelsArgs {
    fn default() -> Self {
        Self {
            free_playground: false,
            publisher_name: None,
            license_name: None,
            model_name: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Arguments of [`GITHUB_MODEL_CODE_SAMPLE`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GithubModelArgs {
    /// Publisher of the model, e.g. `mistral-ai`.
    pub publisher_name: String,
    /// Name of the model, e.g. `mistral-large`.
    pub model_name: String,
}

/// Arguments of [`LABS_PROJECT_CODE_SAMPLE`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabsProjectArgs {
    /// Name of the labs project.
    pub project_name: String,
}

/// Arguments of [`LIST_LABS_PROJECTS`].
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ListLabsProjectsArgs {}

/// Toolbox backed by the catalog and labs clients.
#[derive(Debug, Clone)]
pub struct FoundryToolBox {
    catalog: Catalog,
    labs: Labs,
}

impl FoundryToolBox {
    /// Create a toolbox over the given clients.
    #[must_use]
    pub fn new(catalog: Catalog, labs: Labs) -> Self {
        Self { catalog, labs }
    }

    async fn list_models(&self, call: &ToolUse) -> Result<ToolOutput, ToolError> {
        let args: ListModelsArgs = parse_args(call)?;

        let query = ModelListQuery::builder()
            .free_playground(args.free_playground)
            .maybe_publisher_name(args.publisher_name)
            .maybe_license_name(args.license_name)
            .maybe_model_name(args.model_name)
            .max_pages(args.max_pages)
            .build();

        let result = self
            .catalog
            .list_models(&query)
            .await
            .map_err(|err| ToolError::execution(&call.name, err))?;

        let value = serde_json::to_value(&result)
            .map_err(|err| ToolError::output_serialization(&call.name, err))?;
        Ok(ToolOutput::Json(value))
    }

    async fn github_model_code_sample(&self, call: &ToolUse) -> Result<ToolOutput, ToolError> {
        let args: GithubModelArgs = parse_args(call)?;

        // Labs failures become descriptive text here, at the outermost
        // layer; below this everything is a structured error.
        match self
            .labs
            .github_model_guidance(&args.publisher_name, &args.model_name)
            .await
        {
            Ok(guidance) => Ok(ToolOutput::text(guidance)),
            Err(err) => Ok(ToolOutput::text(format!(
                "Error fetching the code sample from the labs API: {err}"
            ))),
        }
    }

    async fn labs_project_code_sample(&self, call: &ToolUse) -> Result<ToolOutput, ToolError> {
        let args: LabsProjectArgs = parse_args(call)?;

        match self.labs.project_implementation(&args.project_name).await {
            Ok(sample) => Ok(ToolOutput::text(sample.project)),
            Err(err) => Ok(ToolOutput::text(format!(
                "Error fetching the implementation sample from the labs API: {err}"
            ))),
        }
    }

    async fn list_labs_projects(&self, call: &ToolUse) -> Result<ToolOutput, ToolError> {
        let _args: ListLabsProjectsArgs = parse_args(call)?;

        match self.labs.list_projects().await {
            Ok(projects) => {
                let value = serde_json::to_value(&projects)
                    .map_err(|err| ToolError::output_serialization(&call.name, err))?;
                Ok(ToolOutput::Json(value))
            }
            Err(err) => Ok(ToolOutput::text(format!(
                "Error fetching projects from the labs API: {err}"
            ))),
        }
    }
}

impl ToolBox for FoundryToolBox {
    fn tools(&self) -> Vec<FunctionMetadata> {
        vec![
            FunctionMetadata::with_parameters(
                LIST_MODELS,
                "List catalog models with optional filters, paging through the \
                 catalog and deriving the deployment options of every record.",
                schema_for_type::<ListModelsArgs>(),
            ),
            FunctionMetadata::with_parameters(
                GITHUB_MODEL_CODE_SAMPLE,
                "Fetch the usage guidance for a model served through GitHub, \
                 filled in for the given publisher and model name.",
                schema_for_type::<GithubModelArgs>(),
            ),
            FunctionMetadata::with_parameters(
                LABS_PROJECT_CODE_SAMPLE,
                "Fetch the implementation code sample of an experimental labs \
                 project.",
                schema_for_type::<LabsProjectArgs>(),
            ),
            FunctionMetadata::with_parameters(
                LIST_LABS_PROJECTS,
                "List the experimental labs projects.",
                schema_for_type::<ListLabsProjectsArgs>(),
            ),
        ]
    }

    fn invoke(&self, call: ToolUse) -> BoxFuture<'_, Result<ToolOutput, ToolError>> {
        Box::pin(async move {
            match call.name.as_str() {
                LIST_MODELS => self.list_models(&call).await,
                GITHUB_MODEL_CODE_SAMPLE => self.github_model_code_sample(&call).await,
                LABS_PROJECT_CODE_SAMPLE => self.labs_project_code_sample(&call).await,
                LIST_LABS_PROJECTS => self.list_labs_projects(&call).await,
                _ => Err(ToolError::not_found(call.name)),
            }
        })
    }
}

/// Build the registry handed to the host runtime at process start.
#[must_use]
pub fn foundry_toolset(catalog: Catalog, labs: Labs) -> ToolSet {
    ToolSet::new().with_toolbox(FoundryToolBox::new(catalog, labs))
}

/// Deserialize the arguments of one call into the handler's type.
fn parse_args<T: DeserializeOwned>(call: &ToolUse) -> Result<T, ToolError> {
    serde_json::from_value(call.args.clone())
        .map_err(|err| ToolError::input_deserialization(&call.name, err))
}
