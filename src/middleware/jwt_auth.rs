/// JWT authentication for Bearer tokens.
///
/// Two entry points share one validation path: `JwtAuthMiddleware` gates
/// the scopes that only exist for authenticated users (feed, follow,
/// notifications), and the `UserId` extractor authenticates mutating
/// routes that live on otherwise-public resources.
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderMap,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::auth;
use crate::error::AppError;

/// User ID extracted from JWT token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

/// Validate the Authorization header and return the token subject.
pub fn bearer_user_id(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Authentication("Missing Authorization header".into()))?
        .to_str()
        .map_err(|_| AppError::Authentication("Invalid Authorization header".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            AppError::Authentication("Invalid Authorization scheme, expected Bearer".into())
        })?;

    let token_data = auth::validate_token(token).map_err(|e| {
        tracing::debug!("Token validation failed: {}", e);
        AppError::Authentication("Invalid or expired token".into())
    })?;

    Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID in token".into()))
}

/// JWT authentication middleware factory
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // The header borrow ends before extensions_mut(); overlapping
            // RefCell borrows on the request panic at runtime.
            let user_id = bearer_user_id(req.headers())?;
            req.extensions_mut().insert(UserId(user_id));

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Inside an authenticated scope the middleware already ran;
        // elsewhere the extractor validates the header itself.
        if let Some(user_id) = req.extensions().get::<UserId>().copied() {
            return ready(Ok(user_id));
        }

        ready(bearer_user_id(req.headers()).map(UserId).map_err(Error::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_missing_header_rejected() {
        let headers = HeaderMap::new();
        let err = bearer_user_id(&headers).unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        let err = bearer_user_id(&headers).unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn test_valid_token_accepted() {
        crate::auth::initialize_secret("unit-test-secret").unwrap();
        let user_id = Uuid::new_v4();
        let token = crate::auth::generate_access_token(user_id, "carol", 60).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        assert_eq!(bearer_user_id(&headers).unwrap(), user_id);
    }
}
