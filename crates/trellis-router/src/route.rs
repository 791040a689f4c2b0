//! Routes and handlers.
//!
//! A [`Route`] is an immutable `(methods, pattern, handler)` triple. Routes
//! never carry parameters; a match produces its bindings fresh and, when there
//! are any, wraps the stored handler in a [`ParamInjector`] that hands them to
//! the request before delegating.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::Method;

use crate::params::Params;

/// Request type passed to handlers.
pub type Request = http::Request<Bytes>;

/// Response type returned by handlers.
pub type Response = http::Response<Bytes>;

/// A synchronous request handler.
///
/// Any `Fn(Request) -> Response` closure is a handler.
///
/// # Example
///
/// ```rust
/// use trellis_router::{Handler, Request, Response};
///
/// struct Hello;
///
/// impl Handler for Hello {
///     fn call(&self, _request: Request) -> Response {
///         Response::new("hello".into())
///     }
/// }
///
/// let response = Hello.call(Request::new(Default::default()));
/// assert_eq!(response.body(), "hello");
/// ```
pub trait Handler: Send + Sync + 'static {
    /// Handles a request.
    fn call(&self, request: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    fn call(&self, request: Request) -> Response {
        self(request)
    }
}

/// A shared, type-erased handler.
pub type BoxHandler = Arc<dyn Handler>;

/// A registered route.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use trellis_router::{Request, Response, Route};
///
/// let route = Route::get("/users/:id", |_req: Request| Response::new("user".into()))
///     .with_method(Method::HEAD);
///
/// assert_eq!(route.pattern(), "/users/:id");
/// assert!(route.answers(&Method::GET));
/// assert!(route.answers(&Method::HEAD));
/// assert!(!route.answers(&Method::POST));
/// ```
#[derive(Clone)]
pub struct Route {
    pattern: String,
    methods: Vec<Method>,
    handler: BoxHandler,
}

impl Route {
    /// Creates a route answering every method in `methods`.
    ///
    /// Repeated methods are collapsed.
    pub fn new<M, H>(methods: M, pattern: impl Into<String>, handler: H) -> Self
    where
        M: IntoIterator<Item = Method>,
        H: Handler,
    {
        Self::from_shared(methods, pattern, Arc::new(handler))
    }

    /// Creates a route around an already shared handler.
    pub fn from_shared<M>(methods: M, pattern: impl Into<String>, handler: BoxHandler) -> Self
    where
        M: IntoIterator<Item = Method>,
    {
        let mut unique: Vec<Method> = Vec::new();
        for method in methods {
            if !unique.contains(&method) {
                unique.push(method);
            }
        }
        Self {
            pattern: pattern.into(),
            methods: unique,
            handler,
        }
    }

    /// Creates a GET route.
    pub fn get<H: Handler>(pattern: impl Into<String>, handler: H) -> Self {
        Self::new([Method::GET], pattern, handler)
    }

    /// Creates a POST route.
    pub fn post<H: Handler>(pattern: impl Into<String>, handler: H) -> Self {
        Self::new([Method::POST], pattern, handler)
    }

    /// Creates a PUT route.
    pub fn put<H: Handler>(pattern: impl Into<String>, handler: H) -> Self {
        Self::new([Method::PUT], pattern, handler)
    }

    /// Creates a DELETE route.
    pub fn delete<H: Handler>(pattern: impl Into<String>, handler: H) -> Self {
        Self::new([Method::DELETE], pattern, handler)
    }

    /// Creates a PATCH route.
    pub fn patch<H: Handler>(pattern: impl Into<String>, handler: H) -> Self {
        Self::new([Method::PATCH], pattern, handler)
    }

    /// Adds another method this route answers.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        if !self.methods.contains(&method) {
            self.methods.push(method);
        }
        self
    }

    /// The pattern string as registered.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Methods this route answers.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns true if this route answers `method`.
    #[must_use]
    pub fn answers(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    /// The route's handler.
    #[must_use]
    pub fn handler(&self) -> &BoxHandler {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

/// Handler adapter that injects match parameters into the request.
///
/// Parameters go into the request's extensions as a [`Params`] value. If the
/// request already carries one, the two are merged with the match's bindings
/// taking precedence.
pub struct ParamInjector {
    inner: BoxHandler,
    params: Params,
}

impl ParamInjector {
    /// Wraps `inner` so that every call sees `params`.
    #[must_use]
    pub fn new(inner: BoxHandler, params: Params) -> Self {
        Self { inner, params }
    }

    /// Parameters this wrapper injects.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl Handler for ParamInjector {
    fn call(&self, mut request: Request) -> Response {
        let extensions = request.extensions_mut();
        match extensions.get_mut::<Params>() {
            Some(existing) => existing.merge(&self.params),
            None => {
                extensions.insert(self.params.clone());
            }
        }
        self.inner.call(request)
    }
}

impl fmt::Debug for ParamInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamInjector")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Access to parameters injected by a [`ParamInjector`].
pub trait RequestExt {
    /// All injected path parameters, if any.
    fn path_params(&self) -> Option<&Params>;

    /// A single injected path parameter.
    fn param(&self, name: &str) -> Option<&str> {
        self.path_params().and_then(|p| p.get(name))
    }
}

impl<B> RequestExt for http::Request<B> {
    fn path_params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}
