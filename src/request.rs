use reqwest::RequestBuilder;

pub enum RequestType {
    /// A plain request with no body.
    Plain,

    /// A JSON request with a JSON body and the content type set to application/json.
    JSON { body: String },
}

impl RequestType {
    /// Convert the request type to a request builder.
    ///
    /// # Arguments
    /// * `self` - The request type.
    /// * `request` - The request builder.
    ///
    /// # Returns
    /// The modified request builder.
    pub fn to_request(self, request: RequestBuilder) -> RequestBuilder {
        match self {
            RequestType::Plain => request,
            RequestType::JSON { body } => Self::build_json_request(body, request),
        }
    }

    fn build_json_request(body: String, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Content-Type", "application/json")
            .body(body)
    }
}
