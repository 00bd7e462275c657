//! Company management use cases.

use crate::dto::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
use async_trait::async_trait;
use placehub_core::{CompanyId, Interface, PlacehubError, PlacehubResult, ValidateExt};
use placehub_db::{CompanyStore, NewCompany};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Company management use cases.
#[async_trait]
pub trait CompanyService: Interface + Send + Sync {
    /// Creates a new company.
    async fn create_company(&self, request: CreateCompanyRequest)
        -> PlacehubResult<CompanyResponse>;

    /// Replaces a company's fields.
    async fn update_company(
        &self,
        id: CompanyId,
        request: UpdateCompanyRequest,
    ) -> PlacehubResult<CompanyResponse>;

    /// Deletes a company.
    async fn delete_company(&self, id: CompanyId) -> PlacehubResult<()>;

    /// Fetches a single company.
    async fn get_company(&self, id: CompanyId) -> PlacehubResult<CompanyResponse>;

    /// Lists all companies, newest first.
    async fn list_companies(&self) -> PlacehubResult<Vec<CompanyResponse>>;

    /// Searches companies by name, email or description.
    async fn search_companies(&self, term: &str) -> PlacehubResult<Vec<CompanyResponse>>;
}

/// Company service implementation.
#[derive(Component)]
#[shaku(interface = CompanyService)]
pub struct CompanyServiceImpl {
    #[shaku(inject)]
    companies: Arc<dyn CompanyStore>,
}

impl CompanyServiceImpl {
    /// Creates a new company service.
    pub fn new(companies: Arc<dyn CompanyStore>) -> Self {
        Self { companies }
    }
}

#[async_trait]
impl CompanyService for CompanyServiceImpl {
    async fn create_company(
        &self,
        request: CreateCompanyRequest,
    ) -> PlacehubResult<CompanyResponse> {
        debug!("Creating company '{}'", request.name);
        request.validate_request()?;

        let company = self
            .companies
            .create(&NewCompany {
                name: request.name,
                email: request.email,
                logo: request.logo,
                description: request.description,
                headquarters: request.headquarters,
                sub_branch_location: request.sub_branch_location,
            })
            .await?;
        info!("Company '{}' created with id {}", company.name, company.id);

        Ok(CompanyResponse::from(company))
    }

    async fn update_company(
        &self,
        id: CompanyId,
        request: UpdateCompanyRequest,
    ) -> PlacehubResult<CompanyResponse> {
        debug!("Updating company {}", id);
        request.validate_request()?;

        let company = self
            .companies
            .update(
                id,
                &NewCompany {
                    name: request.name,
                    email: request.email,
                    logo: request.logo,
                    description: request.description,
                    headquarters: request.headquarters,
                    sub_branch_location: request.sub_branch_location,
                },
            )
            .await?
            .ok_or_else(|| PlacehubError::not_found("Company", id))?;
        info!("Company {} updated", id);

        Ok(CompanyResponse::from(company))
    }

    async fn delete_company(&self, id: CompanyId) -> PlacehubResult<()> {
        debug!("Deleting company {}", id);

        let deleted = self.companies.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("Company", id));
        }
        info!("Company {} deleted", id);

        Ok(())
    }

    async fn get_company(&self, id: CompanyId) -> PlacehubResult<CompanyResponse> {
        let company = self
            .companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Company", id))?;

        Ok(CompanyResponse::from(company))
    }

    async fn list_companies(&self) -> PlacehubResult<Vec<CompanyResponse>> {
        let companies = self.companies.list_all().await?;

        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    async fn search_companies(&self, term: &str) -> PlacehubResult<Vec<CompanyResponse>> {
        let companies = self.companies.search(term).await?;

        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }
}

impl std::fmt::Debug for CompanyServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyServiceImpl").finish_non_exhaustive()
    }
}
