//! Compiled-in endpoints and test cases

use super::{Endpoint, HttpMethod, KeyValues, TestCase};
use serde::Serialize;

/// Endpoints sharing one sidebar category.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EndpointGroup {
    pub category: String,
    pub endpoints: Vec<Endpoint>,
}

/// Static lookup tables for endpoints and test cases.
#[derive(Debug, Clone)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
    test_cases: Vec<TestCase>,
}

impl Catalog {
    pub fn new(endpoints: Vec<Endpoint>, test_cases: Vec<TestCase>) -> Self {
        Self {
            endpoints,
            test_cases,
        }
    }

    /// The built-in demo catalog.
    pub fn seed() -> Self {
        Self::new(seed_endpoints(), seed_test_cases())
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    pub fn test_case(&self, id: &str) -> Option<&TestCase> {
        self.test_cases.iter().find(|t| t.id == id)
    }

    pub fn test_cases_for(&self, endpoint_id: &str) -> Vec<&TestCase> {
        self.test_cases
            .iter()
            .filter(|t| t.endpoint_id == endpoint_id)
            .collect()
    }

    /// Groups endpoints by category, keeping first-seen category order.
    pub fn grouped(&self) -> Vec<EndpointGroup> {
        let mut groups: Vec<EndpointGroup> = Vec::new();
        for endpoint in &self.endpoints {
            match groups.iter_mut().find(|g| g.category == endpoint.category) {
                Some(group) => group.endpoints.push(endpoint.clone()),
                None => groups.push(EndpointGroup {
                    category: endpoint.category.clone(),
                    endpoints: vec![endpoint.clone()],
                }),
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn endpoint(id: &str, name: &str, path: &str, category: &str) -> Endpoint {
    Endpoint {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
        category: category.to_string(),
    }
}

fn pairs(entries: &[(&str, &str)]) -> KeyValues {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seed_endpoints() -> Vec<Endpoint> {
    vec![
        endpoint("1", "Get Users", "/users", "Users"),
        endpoint("2", "Get User by ID", "/users/{id}", "Users"),
        endpoint("3", "Create User", "/users", "Users"),
        endpoint("4", "Update User", "/users/{id}", "Users"),
        endpoint("5", "Delete User", "/users/{id}", "Users"),
        endpoint("6", "Get Products", "/products", "Products"),
        endpoint("7", "Get Product by ID", "/products/{id}", "Products"),
        endpoint("8", "Create Product", "/products", "Products"),
        endpoint("9", "Orders List", "/orders", "Orders"),
        endpoint("10", "Order Details", "/orders/{id}", "Orders"),
    ]
}

fn seed_test_cases() -> Vec<TestCase> {
    let accept_json = pairs(&[("Accept", "application/json")]);
    let new_user = serde_json::json!({ "name": "John Doe", "email": "john@example.com" });

    vec![
        TestCase {
            id: "1".to_string(),
            name: "Get All Users".to_string(),
            endpoint_id: "1".to_string(),
            method: HttpMethod::Get,
            headers: accept_json.clone(),
            body: String::new(),
            query_params: KeyValues::new(),
        },
        TestCase {
            id: "2".to_string(),
            name: "Get User 123".to_string(),
            endpoint_id: "2".to_string(),
            method: HttpMethod::Get,
            headers: accept_json.clone(),
            body: String::new(),
            query_params: pairs(&[("id", "123")]),
        },
        TestCase {
            id: "3".to_string(),
            name: "Create New User".to_string(),
            endpoint_id: "3".to_string(),
            method: HttpMethod::Post,
            headers: pairs(&[
                ("Content-Type", "application/json"),
                ("Accept", "application/json"),
            ]),
            body: serde_json::to_string_pretty(&new_user).unwrap_or_default(),
            query_params: KeyValues::new(),
        },
        TestCase {
            id: "4".to_string(),
            name: "Get All Products".to_string(),
            endpoint_id: "6".to_string(),
            method: HttpMethod::Get,
            headers: accept_json.clone(),
            body: String::new(),
            query_params: KeyValues::new(),
        },
        TestCase {
            id: "5".to_string(),
            name: "Get Orders with Pagination".to_string(),
            endpoint_id: "9".to_string(),
            method: HttpMethod::Get,
            headers: accept_json,
            body: String::new(),
            query_params: pairs(&[("page", "1"), ("limit", "10")]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.endpoints().len(), 10);
        assert_eq!(catalog.test_cases().len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_grouping_keeps_category_order() {
        let groups = Catalog::seed().grouped();
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Users", "Products", "Orders"]);
        let sizes: Vec<_> = groups.iter().map(|g| g.endpoints.len()).collect();
        assert_eq!(sizes, vec![5, 3, 2]);
        assert_eq!(groups[0].endpoints[0].name, "Get Users");
        assert_eq!(groups[2].endpoints[1].name, "Order Details");
    }

    #[test]
    fn test_every_test_case_references_an_endpoint() {
        let catalog = Catalog::seed();
        for test_case in catalog.test_cases() {
            assert!(
                catalog.endpoint(&test_case.endpoint_id).is_some(),
                "dangling endpoint id on test case {}",
                test_case.id
            );
        }
    }

    #[test]
    fn test_test_cases_for_endpoint() {
        let catalog = Catalog::seed();
        let orders = catalog.test_cases_for("9");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].name, "Get Orders with Pagination");
        assert!(catalog.test_cases_for("10").is_empty());
    }

    #[test]
    fn test_create_user_body_is_pretty_json() {
        let catalog = Catalog::seed();
        let create = catalog.test_case("3").unwrap();
        assert_eq!(
            create.body,
            "{\n  \"name\": \"John Doe\",\n  \"email\": \"john@example.com\"\n}"
        );
    }

    #[test]
    fn test_path_param_marker() {
        let catalog = Catalog::seed();
        assert!(!catalog.endpoint("1").unwrap().has_path_param());
        assert!(catalog.endpoint("2").unwrap().has_path_param());
    }
}
