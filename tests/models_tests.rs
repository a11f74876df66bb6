//! Data model unit tests

use chrono::NaiveDate;
use serde_json::json;
use spendee::models::*;
use spendee::services::reduce_response;
use spendee::RawResponse;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_login_envelope_to_login_result() {
    let body = json!({
        "result": {
            "id": 999999,
            "email": "fry@planetexpress.com",
            "firstname": "Phillip J.",
            "lastname": "Fry",
            "uuid": "bbbf1c6f-9999-9999-86cd-89ec2632e8d5",
            "global_currency": "EUR",
            "api_uuid": "5808b3d4-9999-9999-8466-aad7f20b3252"
        },
        "version": "v1.4",
        "service": "api.user-login",
        "timestamp": "2019-12-29 07:30:01.163292",
        "status": "SUCCESS",
        "checksum": "addc3a80c74aa7268d14bee0209cc72a"
    });
    let raw = RawResponse::new(200, "https://api.spendee.com/v1.4/user-login", body.to_string());

    let result = reduce_response(raw).unwrap();
    let login: LoginResult = serde_json::from_value(result).unwrap();

    assert_eq!(login.token(), Some("5808b3d4-9999-9999-8466-aad7f20b3252"));
    assert_eq!(login.uuid.as_deref(), Some("bbbf1c6f-9999-9999-86cd-89ec2632e8d5"));
    assert_eq!(login.email.as_deref(), Some("fry@planetexpress.com"));
    assert_eq!(login.profile["firstname"], "Phillip J.");
}

#[test]
fn test_envelope_metadata_is_optional() {
    let envelope: ResponseEnvelope =
        serde_json::from_str(r#"{"status":"SUCCESS","result":{"id":1}}"#).unwrap();

    assert!(envelope.is_success());
    assert!(envelope.version.is_none());
    assert!(envelope.checksum.is_none());

    let rendered = serde_json::to_value(&envelope).unwrap();
    assert!(rendered.get("error").is_none());
    assert_eq!(rendered["status"], SUCCESS_STATUS);
}

#[test]
fn test_registration_defaults() {
    let request = RegistrationRequest::new("leela@planetexpress.com", "nibbler", "device");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "email": "leela@planetexpress.com",
            "password": "nibbler",
            "categories_version": 2,
            "with_categories": true,
            "device_uuid": "device"
        })
    );
}

#[test]
fn test_wallet_builders() {
    let wallet = NewWallet::new("Savings", "CZK").starting_balance(2500.0).order(3);
    let value = serde_json::to_value(&wallet).unwrap();

    assert_eq!(value["starting_balance"], 2500.0);
    assert_eq!(value["order"], 3);
    assert_eq!(value["currency"], "CZK");

    assert_eq!(TransactionPage::default(), TransactionPage { offset: 0, limit: 10_000 });
}

#[test]
fn test_category_kind_wire_names() {
    assert_eq!(serde_json::to_value(CategoryKind::Expense).unwrap(), "expense");
    assert_eq!(serde_json::to_value(CategoryKind::Income).unwrap(), "income");
    assert_eq!(CategoryKind::default(), CategoryKind::Expense);
}

#[test]
fn test_budget_period_wire_names() {
    let periods = [
        (BudgetPeriod::Once, "once"),
        (BudgetPeriod::Daily, "daily"),
        (BudgetPeriod::Weekly, "weekly"),
        (BudgetPeriod::Biweekly, "biweekly"),
        (BudgetPeriod::Monthly, "monthly"),
        (BudgetPeriod::Yearly, "yearly"),
    ];

    for (period, expected) in periods {
        assert_eq!(serde_json::to_value(period).unwrap(), expected);
    }
}

#[test]
fn test_budget_selection_flags_and_explicit_dates() {
    let body = BudgetDraft::new("Groceries", 250.0, "EUR")
        .categories(vec![10, 11])
        .only_selected_categories()
        .users(vec![999999])
        .only_selected_users()
        .start_date(day(2020, 1, 1))
        .end_date(day(2020, 12, 31))
        .period(BudgetPeriod::Yearly)
        .notification(false)
        .into_request(None, day(2020, 4, 17));
    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(value["categories"], json!([10, 11]));
    assert_eq!(value["all_categories_selected"], 0);
    assert_eq!(value["all_users_selected"], 0);
    assert_eq!(value["all_wallets_selected"], 1);
    assert_eq!(value["start_date"], "2020-01-01");
    assert_eq!(value["end_date"], "2020-12-31");
    assert_eq!(value["notification"], false);
}

#[test]
fn test_bank_connection_defaults() {
    let value = serde_json::to_value(BankConnection::new("demobank_xo")).unwrap();

    assert_eq!(value["oauth_return_url"], DEFAULT_BANK_OAUTH_RETURN_URL);
    assert_eq!(value["server_account_picker"], false);
}
