//! Booking form screen.

use crate::api::Api;
use crate::error::ApiError;
use crate::transport::CancelToken;
use crate::types::{Booking, NewBooking};

/// Services offered by the booking form's picker.
pub const SERVICE_CHOICES: [&str; 6] = [
    "Bridal Makeup",
    "Party Makeup",
    "Facial Treatment",
    "Hair Styling",
    "Manicure & Pedicure",
    "Other",
];

pub struct BookingScreen {
    pub submitting: bool,
    cancel: CancelToken,
}

impl BookingScreen {
    pub fn new() -> Self {
        Self {
            submitting: false,
            cancel: CancelToken::new(),
        }
    }

    /// Submit the form. Any missing required field (name, phone, service,
    /// date, time) fails the pre-check and no request is issued. On success
    /// the backend answers with the booking in `pending` state.
    pub fn submit(&mut self, api: &Api, input: &NewBooking) -> Result<Booking, ApiError> {
        let api = api.scoped(self.cancel.clone());
        self.submitting = true;
        let result = api.create_booking(input);
        self.submitting = false;
        result
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for BookingScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::transport::testing::FakeTransport;

    fn valid_booking() -> NewBooking {
        NewBooking {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            email: None,
            service: "Party Makeup".to_string(),
            date: "2024-06-01".to_string(),
            time: "15:00".to_string(),
            message: None,
        }
    }

    #[test]
    fn missing_required_field_issues_no_request() {
        let transport = Arc::new(FakeTransport::new());
        let api = Api::with_transport("http://test", transport.clone());
        let mut screen = BookingScreen::new();

        for field in ["name", "phone", "service", "date", "time"] {
            let mut input = valid_booking();
            match field {
                "name" => input.name.clear(),
                "phone" => input.phone.clear(),
                "service" => input.service.clear(),
                "date" => input.date.clear(),
                "time" => input.time.clear(),
                _ => unreachable!(),
            }
            let err = screen.submit(&api, &input).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{field}");
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn every_picker_choice_is_a_valid_service_value() {
        for choice in SERVICE_CHOICES {
            let mut input = valid_booking();
            input.service = choice.to_string();
            assert!(input.validate().is_ok(), "{choice}");
        }
    }

    #[test]
    fn successful_submission_clears_the_submitting_flag() {
        let transport = FakeTransport::new().route(
            "/api/bookings",
            200,
            r#"{
                "id": "b1",
                "name": "Asha",
                "phone": "9876543210",
                "service": "Party Makeup",
                "date": "2024-06-01",
                "time": "15:00",
                "status": "pending",
                "createdAt": "2024-01-01T00:00:00Z"
            }"#,
        );
        let api = Api::with_transport("http://test", Arc::new(transport));
        let mut screen = BookingScreen::new();

        let booking = screen.submit(&api, &valid_booking()).unwrap();
        assert_eq!(booking.id, "b1");
        assert!(!screen.submitting);
    }

    #[test]
    fn backend_failure_surfaces_to_the_caller() {
        let transport = FakeTransport::new().route("/api/bookings", 500, r#"{"detail":"boom"}"#);
        let api = Api::with_transport("http://test", Arc::new(transport));
        let mut screen = BookingScreen::new();

        let err = screen.submit(&api, &valid_booking()).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert!(!screen.submitting);
    }
}
