// MIT License
// Copyright (c) Valan Sai 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions.
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// External crates
use chrono::{DateTime, Local};
use uuid::Uuid;


/// A transport request captured in this session.
/// Holds the rider details plus submission metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRequest {
    /// Unique identifier for the request.
    pub request_id: String,

    /// Full name of the passenger or contact person.
    pub passenger: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Where the ride starts.
    pub pickup: String,

    /// Where the ride ends.
    pub destination: String,

    /// Free-form notes for the operator.
    pub notes: String,

    /// When the request was submitted.
    pub submitted: DateTime<Local>,
}

/// Editable draft bound to the request form widgets.
#[derive(Debug, Default, Clone)]
pub struct RequestForm {
    pub passenger: String,
    pub phone: String,
    pub email: String,
    pub pickup: String,
    pub destination: String,
    pub notes: String,
}

impl RequestForm {
    // Checks the draft without consuming it
    // Returns an error naming the first field that fails
    pub fn validate(&self) -> Result<(), String> {
        if self.passenger.trim().is_empty() {
            return Err("Passenger name is required".to_string());
        }

        if self.phone.trim().is_empty() {
            return Err("Phone number is required".to_string());
        }

        if self.email.trim().is_empty() {
            return Err("Email address is required".to_string());
        }

        if !self.email.contains('@') {
            return Err(format!("Invalid email address: {}", self.email.trim()));
        }

        if self.pickup.trim().is_empty() {
            return Err("Pickup location is required".to_string());
        }

        if self.destination.trim().is_empty() {
            return Err("Destination is required".to_string());
        }

        Ok(())
    }

    /// Turns a valid draft into a [`RideRequest`] and clears the form.
    ///
    /// # Returns
    /// The submitted request, or the validation error with the draft left
    /// untouched for correction.
    pub fn submit(&mut self) -> Result<RideRequest, String> {
        self.validate()?;

        let request = RideRequest {
            request_id: Uuid::new_v4().to_string(),
            passenger: self.passenger.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            pickup: self.pickup.trim().to_string(),
            destination: self.destination.trim().to_string(),
            notes: self.notes.trim().to_string(),
            submitted: Local::now(),
        };

        *self = Self::default();
        Ok(request)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RequestForm {
        RequestForm {
            passenger: "Maria Lopez".to_string(),
            phone: "555 0134".to_string(),
            email: "maria@example.com".to_string(),
            pickup: "North Campus".to_string(),
            destination: "Convention Center".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn a_filled_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in ["passenger", "phone", "email", "pickup", "destination"] {
            let mut form = filled_form();
            match field {
                "passenger" => form.passenger.clear(),
                "phone" => form.phone.clear(),
                "email" => form.email.clear(),
                "pickup" => form.pickup.clear(),
                _ => form.destination.clear(),
            }
            assert!(form.validate().is_err(), "{} should be required", field);
        }
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let mut form = filled_form();
        form.passenger = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn notes_are_optional() {
        let mut form = filled_form();
        form.notes.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled_form();
        form.email = "maria.example.com".to_string();

        let err = form.validate().unwrap_err();
        assert!(err.contains("email") || err.contains("Email") || err.contains("address"));
    }

    #[test]
    fn submit_builds_the_request_and_clears_the_draft() {
        let mut form = filled_form();
        form.notes = "  wheelchair access  ".to_string();

        let request = form.submit().unwrap();

        assert_eq!(request.passenger, "Maria Lopez");
        assert_eq!(request.notes, "wheelchair access");
        assert!(!request.request_id.is_empty());

        // Draft is ready for the next request
        assert!(form.passenger.is_empty());
        assert!(form.notes.is_empty());
    }

    #[test]
    fn failed_submit_keeps_the_draft_for_correction() {
        let mut form = filled_form();
        form.email.clear();

        assert!(form.submit().is_err());
        assert_eq!(form.passenger, "Maria Lopez");
    }

    #[test]
    fn request_ids_are_unique() {
        let mut form = filled_form();
        let first = form.submit().unwrap();

        let mut form = filled_form();
        let second = form.submit().unwrap();

        assert_ne!(first.request_id, second.request_id);
    }
}
