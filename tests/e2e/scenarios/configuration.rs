use crate::harness::service::StubService;
use alaska_core::{check_bear, AlaskaClient, BearType, Config};
use tempfile::TempDir;

#[test]
fn test_client_from_config_file() {
    let stub = StubService::start().unwrap();
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("alaska.toml");

    let mut config = Config::default().with_base_url(stub.base_url());
    config.transport.timeout_secs = Some(5);
    config.readiness.timeout_secs = 2.0;
    config.save(&path).unwrap();

    let client = AlaskaClient::new(Config::load(&path).unwrap()).unwrap();
    client.wait_until_responsive().unwrap();
    client.user_clean_all_bears().unwrap();
    client.user_create_bear(BearType::Polar, "UMKA", 10.1).unwrap();

    let bears = client.user_view_all_bears().unwrap();
    assert_eq!(bears.len(), 1);
    check_bear(&bears[0], BearType::Polar, "UMKA", 10.1).unwrap();
}

#[test]
fn test_two_services_from_one_process() {
    let first = StubService::start().unwrap();
    let second = StubService::start().unwrap();

    let a = AlaskaClient::new(Config::default().with_base_url(first.base_url())).unwrap();
    let b = AlaskaClient::new(Config::default().with_base_url(second.base_url())).unwrap();
    a.wait_until_responsive().unwrap();
    b.wait_until_responsive().unwrap();

    a.user_create_bear(BearType::Black, "YOGI", 8.0).unwrap();

    assert_eq!(a.user_view_all_bears().unwrap().len(), 1);
    assert!(b.user_view_all_bears().unwrap().is_empty());
}
