/// Outcome of a single domain service call.
///
/// A success always carries the resource and an empty message; a failure
/// never carries a resource and always carries a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResponse<T> {
    Success(T),
    Failure(String),
}

impl<T> ServiceResponse<T> {
    pub fn success(resource: T) -> Self {
        Self::Success(resource)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::Failure("Unknown error".to_string());
        }
        Self::Failure(message)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn resource(&self) -> Option<&T> {
        match self {
            Self::Success(resource) => Some(resource),
            Self::Failure(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(_) => "",
            Self::Failure(message) => message,
        }
    }

    pub fn into_resource(self) -> Option<T> {
        match self {
            Self::Success(resource) => Some(resource),
            Self::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(resource) => Ok(resource),
            Self::Failure(message) => Err(message),
        }
    }

    pub fn map<U, F>(self, f: F) -> ServiceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(resource) => ServiceResponse::Success(f(resource)),
            Self::Failure(message) => ServiceResponse::Failure(message),
        }
    }
}

impl<T> From<ServiceResponse<T>> for Result<T, String> {
    fn from(response: ServiceResponse<T>) -> Self {
        response.into_result()
    }
}
