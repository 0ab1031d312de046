//! Wire-format and JsonSchema validation tests for storefront entities.
//!
//! Fixtures mirror what the storefront backend actually sends: camelCase
//! keys, optional fields omitted or `null`.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use zmb_core::entities::*;
use zmb_core::enums::*;
use zmb_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! parse_and_validate {
    ($name:ident, $ty:ty, $fixture:expr, |$parsed:ident| $checks:block) => {
        #[test]
        fn $name() {
            let $parsed: $ty = serde_json::from_str($fixture).expect("fixture should parse");

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&$parsed).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );

            $checks
        }
    };
}

parse_and_validate!(
    category_with_parent,
    Category,
    r#"{"id":"c-12","name":"Sneakers","slug":"sneakers","image":"https://cdn.zumbara.com/c12.webp","parentId":"c-3"}"#,
    |category| {
        assert_eq!(category.parent_id.as_deref(), Some("c-3"));
        assert!(!category.is_root());
    }
);

parse_and_validate!(
    root_category_omits_optional_fields,
    Category,
    r#"{"id":"c-1","name":"Fashion","slug":"fashion"}"#,
    |category| {
        assert!(category.is_root());
        assert!(category.image.is_none());
    }
);

parse_and_validate!(
    product_defaults_currency_and_images,
    Product,
    r#"{"id":"p-9","name":"Habesha Kemis","slug":"habesha-kemis","price":4500.5,"stock":0,"categoryId":"c-1"}"#,
    |product| {
        assert_eq!(product.currency, "ETB");
        assert!(product.images.is_empty());
        assert!(!product.in_stock());
    }
);

parse_and_validate!(
    order_with_pending_proof,
    Order,
    r#"{
        "id": "o-77",
        "status": "proof_submitted",
        "total": 1200,
        "currency": "ETB",
        "items": [{"productId":"p-1","name":"Coffee","quantity":2,"unitPrice":600}],
        "createdAt": "2026-09-30T08:15:00Z",
        "paymentProof": {"id":"pp-1","orderId":"o-77","url":"https://files.zumbara.com/r.jpg","status":"pending","note":null}
    }"#,
    |order| {
        assert_eq!(order.status, OrderStatus::ProofSubmitted);
        assert_eq!(order.items[0].quantity, 2);
        let proof = order.payment_proof.expect("proof present");
        assert_eq!(proof.status, ProofStatus::Pending);
        assert!(proof.note.is_none());
    }
);

parse_and_validate!(
    product_page,
    Page<Product>,
    r#"{"items":[{"id":"p-1","name":"Coffee","slug":"coffee","price":300}],"page":1,"limit":20,"total":1}"#,
    |page| {
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more());
    }
);

#[test]
fn new_category_skips_absent_optionals() {
    let payload = NewCategory {
        name: "Shoes".into(),
        slug: "shoes".into(),
        image: None,
        parent_id: Some("c-1".into()),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Shoes", "slug": "shoes", "parentId": "c-1"})
    );
}

#[test]
fn proof_review_serializes_status() {
    let review = ProofReview {
        status: ProofStatus::Approved,
        note: None,
    };
    assert_eq!(
        serde_json::to_value(&review).unwrap(),
        serde_json::json!({"status": "approved"})
    );
}

#[test]
fn not_found_response_shape() {
    let response = NotFoundResponse::new("order", "o-404");
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({"found": false, "entity_type": "order", "id": "o-404"})
    );
}
