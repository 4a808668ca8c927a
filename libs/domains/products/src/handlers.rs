use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, StockAdjustment, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        low_stock_products,
        get_product,
        update_product,
        delete_product,
        increase_stock,
        decrease_stock,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Warehouse product and stock endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ProductService<R>>>;

/// Product routes, mounted by the app under `/api/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/lowstock", get(low_stock_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/increasestock", post(increase_stock))
        .route("/{id}/decreasestock", post(decrease_stock))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products, ascending id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): SharedService<R>,
) -> ProductResult<Json<Vec<Product>>> {
    Ok(Json(service.find_all().await?))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): SharedService<R>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Products whose stock is below their own threshold
#[utoipa::path(
    get,
    path = "/lowstock",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Low-stock products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn low_stock_products<R: ProductRepository>(
    State(service): SharedService<R>,
) -> ProductResult<Json<Vec<Product>>> {
    Ok(Json(service.get_low_stock_products().await?))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service
        .find_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Replace a product's name, description, stock and threshold
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let mut product = service
        .find_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    product.apply_update(input);
    Ok(Json(service.save(product).await?))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    if service.find_by_id(id).await?.is_none() {
        return Err(ProductError::NotFound(id));
    }

    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add units to a product's stock
#[utoipa::path(
    post,
    path = "/{id}/increasestock",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID"),
        StockAdjustment
    ),
    responses(
        (status = 200, description = "Stock increased", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increase_stock<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    adjustment: Result<Query<StockAdjustment>, QueryRejection>,
) -> Result<Json<Product>, AppError> {
    let Query(StockAdjustment { quantity }) = adjustment?;
    let product = service
        .increase_stock(id, quantity)
        .await
        .map_err(adjustment_error)?;
    Ok(Json(product))
}

/// Remove units from a product's stock
#[utoipa::path(
    post,
    path = "/{id}/decreasestock",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID"),
        StockAdjustment
    ),
    responses(
        (status = 200, description = "Stock decreased", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn decrease_stock<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    adjustment: Result<Query<StockAdjustment>, QueryRejection>,
) -> Result<Json<Product>, AppError> {
    let Query(StockAdjustment { quantity }) = adjustment?;
    let product = service
        .decrease_stock(id, quantity)
        .await
        .map_err(adjustment_error)?;
    Ok(Json(product))
}

/// The adjustment routes answer an unknown product with 400, not 404
fn adjustment_error(err: ProductError) -> AppError {
    match err {
        ProductError::NotFound(_) => AppError::BadRequest(err.to_string()),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_error_folds_not_found_into_bad_request() {
        let err = adjustment_error(ProductError::NotFound(5));
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains('5')));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_adjustment_error_keeps_other_mappings() {
        assert_eq!(
            adjustment_error(ProductError::Database("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(matches!(
            adjustment_error(ProductError::Validation("bad".into())),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_openapi_lists_product_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/lowstock"));
        assert!(paths.iter().any(|p| p.as_str() == "/{id}/decreasestock"));
    }
}
