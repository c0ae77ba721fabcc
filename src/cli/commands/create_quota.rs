//! cfq create-quota - Define a new resource quota
//!
//! Flow: check arity, plan and check requirements, announce, build the
//! request, create it, then classify the result. Nothing is retried.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::api::{ApiClient, ApiError, HttpQuotaRepository, QuotaRepository};
use crate::app::AppContext;
use crate::cli::output::Ui;
use crate::core::requirements::{self, RequirementContext};
use crate::core::{QuotaFlags, build_request};
use crate::error::{CfqError, Result};
use crate::session::Session;

#[derive(Args, Debug, Clone, Default)]
pub struct CreateQuotaArgs {
    /// Name of the quota definition
    #[arg(value_name = "QUOTA_NAME")]
    pub names: Vec<String>,

    /// Total amount of memory (e.g. 1024M, 1G, 10G)
    #[arg(short = 'm', value_name = "TOTAL_MEMORY", allow_hyphen_values = true)]
    pub total_memory: Option<String>,

    /// Maximum amount of memory an application instance can have (e.g. 1024M, 1G, 10G). -1 represents an unlimited amount.
    #[arg(short = 'i', value_name = "INSTANCE_MEMORY", allow_hyphen_values = true)]
    pub instance_memory: Option<String>,

    /// Total number of routes
    #[arg(short = 'r', value_name = "ROUTES", allow_negative_numbers = true)]
    pub routes: Option<i32>,

    /// Total number of service instances
    #[arg(short = 's', value_name = "SERVICE_INSTANCES", allow_negative_numbers = true)]
    pub service_instances: Option<i32>,

    /// Total number of application instances. -1 represents an unlimited amount. (Default: unlimited)
    #[arg(short = 'a', value_name = "APP_INSTANCES", allow_negative_numbers = true)]
    pub app_instances: Option<i32>,

    /// Maximum number of routes that may be created with reserved ports (Default: 0)
    #[arg(long, value_name = "N")]
    pub reserved_route_ports: Option<i32>,

    /// Can provision instances of paid service plans
    #[arg(long)]
    pub allow_paid_service_plans: bool,
}

impl CreateQuotaArgs {
    /// The single positional quota name.
    pub fn quota_name(&self) -> Result<&str> {
        match self.names.as_slice() {
            [name] => Ok(name),
            _ => Err(CfqError::Usage("Requires an argument".to_string())),
        }
    }

    #[must_use]
    pub fn flags(&self) -> QuotaFlags {
        QuotaFlags {
            total_memory: self.total_memory.clone(),
            instance_memory: self.instance_memory.clone(),
            routes: self.routes,
            service_instances: self.service_instances,
            app_instances: self.app_instances,
            reserved_route_ports: self.reserved_route_ports,
            allow_paid_service_plans: self.allow_paid_service_plans,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub quota: String,
    pub user: String,
    pub status: OutcomeStatus,
}

/// Collaborators the command talks to.
pub struct Collaborators<'a> {
    pub requirements: &'a dyn RequirementContext,
    pub repo: &'a dyn QuotaRepository,
    pub user: &'a str,
}

pub fn run(ctx: &AppContext, args: &CreateQuotaArgs, ui: &mut dyn Ui) -> Result<()> {
    args.quota_name()?;

    let client = match ApiClient::from_config(&ctx.config.api, &ctx.config.session) {
        Ok(client) => client,
        Err(err) => {
            // Unmet preconditions are reported ahead of an unusable endpoint.
            let session = Session::new(&ctx.config.session, None);
            requirements::execute(&requirements::plan(&args.flags()), &session)?;
            return Err(err);
        }
    };
    let session = Session::new(&ctx.config.session, Some(&client));
    let repo = HttpQuotaRepository::new(&client);
    let deps = Collaborators {
        requirements: &session,
        repo: &repo,
        user: session.username(),
    };

    run_with(args, &deps, ui)
}

/// Execute and hand the outcome to the reporter.
pub fn run_with(args: &CreateQuotaArgs, deps: &Collaborators<'_>, ui: &mut dyn Ui) -> Result<()> {
    let outcome = execute(args, deps, ui)?;
    ui.done(serde_json::to_value(&outcome)?)
}

pub fn execute(args: &CreateQuotaArgs, deps: &Collaborators<'_>, ui: &mut dyn Ui) -> Result<Outcome> {
    let name = args.quota_name()?;
    let flags = args.flags();

    let plan = requirements::plan(&flags);
    requirements::execute(&plan, deps.requirements)?;

    ui.say(&format!("Creating quota {name} as {}...", deps.user));

    let request = build_request(name, &flags)?;

    let status = match deps.repo.create(&request) {
        Ok(()) => OutcomeStatus::Created,
        Err(ApiError::NameTaken { description }) => {
            debug!(quota = name, %description, "quota definition name already taken");
            OutcomeStatus::AlreadyExists
        }
        Err(err @ (ApiError::Http { .. } | ApiError::Transport(_) | ApiError::Decode(_))) => {
            return Err(CfqError::Remote(err));
        }
    };

    ui.ok();
    if status == OutcomeStatus::AlreadyExists {
        ui.warn(&format!("Quota Definition {name} already exists"));
    }

    Ok(Outcome {
        quota: name.to_string(),
        user: deps.user.to_string(),
        status,
    })
}
