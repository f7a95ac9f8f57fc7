/// Generate client methods with oneshot channel boilerplate and automatic tracing.
///
/// The generated method sends `$request::$variant { params.., respond_to }` and
/// waits until the service acknowledges it.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<(), $crate::app_system::ClientError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::app_system::ClientError::ActorCommunicationError("Cart service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::app_system::ClientError::ActorCommunicationError("Cart service dropped".to_string()))
            }
        }
    };
}
