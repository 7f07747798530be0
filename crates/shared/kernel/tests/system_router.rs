use dmart_kernel::server::system_router;

#[test]
fn system_router_documents_the_health_route() {
    let (_, api) = system_router::<()>().split_for_parts();

    let path = api.paths.paths.get("/health").expect("/health in the OpenAPI document");
    assert!(path.get.is_some(), "/health should answer GET");
}
