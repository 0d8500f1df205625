//! Vacancy and employer retrieval from the hh.ru API.

use crate::config::ApiConfig;
use crate::description::clean_description;
use crate::error::FetchError;
use crate::salary::{normalize_salary, RawSalary};
use crate::transport::Transport;
use common::{EmployerRecord, VacancyRecord};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct VacancyPage {
    items: Vec<RawVacancy>,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct RawVacancy {
    id: String,
    name: String,
    salary: Option<RawSalary>,
    snippet: RawSnippet,
    employer: RawEmployerRef,
    alternate_url: String,
}

#[derive(Debug, Deserialize)]
struct RawSnippet {
    requirement: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEmployerRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawEmployer {
    id: String,
    name: String,
    description: Option<String>,
    site_url: String,
}

impl From<RawVacancy> for VacancyRecord {
    fn from(raw: RawVacancy) -> Self {
        Self {
            salary: normalize_salary(raw.salary.as_ref()),
            description: clean_description(raw.snippet.requirement.as_deref()),
            id: raw.id,
            title: raw.name,
            employer: raw.employer.name,
            url: raw.alternate_url,
        }
    }
}

pub struct ListingFetcher<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ListingFetcher<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Collects every vacancy the employer has open in the configured area,
    /// in the order the API returns them.
    ///
    /// Pagination stops at the last reported page, at an empty page, or at
    /// the first non-success response. In the last case the pages gathered
    /// so far are returned without an error.
    pub fn get_vacancies(&self, employer_id: &str) -> Result<Vec<VacancyRecord>, FetchError> {
        if employer_id.is_empty() {
            return Err(FetchError::Validation);
        }

        let url = self.config.vacancies_url();
        let mut vacancies = Vec::new();
        let mut page: u32 = 0;

        loop {
            let query = [
                ("employer_id", employer_id.to_string()),
                ("per_page", self.config.per_page.to_string()),
                ("area", self.config.area.to_string()),
                ("page", page.to_string()),
            ];
            let response = self.transport.get(&url, &query)?;

            if !response.is_success() {
                warn!(
                    employer_id,
                    page,
                    status = response.status,
                    kept = vacancies.len(),
                    "vacancy page request failed, stopping pagination"
                );
                break;
            }

            let data: VacancyPage = serde_json::from_str(&response.body)?;
            if data.items.is_empty() {
                break;
            }

            info!(
                employer_id,
                page,
                pages = data.pages,
                items = data.items.len(),
                "fetched vacancy page"
            );
            vacancies.extend(data.items.into_iter().map(VacancyRecord::from));

            if page.saturating_add(1) >= data.pages {
                break;
            }
            page += 1;
        }

        info!(employer_id, total = vacancies.len(), "vacancy listing complete");
        Ok(vacancies)
    }

    /// Fetches the employer card and pairs it with each of its vacancies:
    /// one record per vacancy, identical apart from `id_vacancy`.
    pub fn get_employers(&self, employer_id: &str) -> Result<Vec<EmployerRecord>, FetchError> {
        if employer_id.is_empty() {
            return Err(FetchError::Validation);
        }

        let response = self
            .transport
            .get(&self.config.employer_url(employer_id), &[])?;
        if !response.is_success() {
            return Err(FetchError::EmployerUnavailable {
                status: response.status,
            });
        }

        let data: RawEmployer = serde_json::from_str(&response.body)?;
        let mut employer = EmployerRecord {
            id_company: data.id,
            employer_name: data.name,
            description: clean_description(data.description.as_deref()),
            site: data.site_url,
            id_vacancy: String::new(),
        };
        info!(employer_id, name = %employer.employer_name, "fetched employer");

        let mut employers = Vec::new();
        for vacancy in self.get_vacancies(employer_id)? {
            employer.id_vacancy = vacancy.id;
            employers.push(employer.clone());
        }

        Ok(employers)
    }
}
