use htmlescape::encode_minimal;

use crate::domain::ContactSubmission;

pub const SUBJECT_PREFIX: &str = "New Contact Form Submission: ";

/// Renders the notification sent to the site owner for one submission.
pub struct ContactEmailTemplate<'a> {
    pub submission: &'a ContactSubmission,
    pub site_name: &'a str,
}

impl<'a> ContactEmailTemplate<'a> {
    pub fn new(submission: &'a ContactSubmission, site_name: &'a str) -> Self {
        Self {
            submission,
            site_name,
        }
    }

    pub fn subject(&self) -> String {
        format!("{}{}", SUBJECT_PREFIX, self.submission.subject)
    }

    pub fn html(&self) -> String {
        let name = encode_minimal(&self.submission.name);
        let email = encode_minimal(&self.submission.email);
        let subject = encode_minimal(&self.submission.subject);
        let message = encode_minimal(&self.submission.message);
        let site_name = encode_minimal(self.site_name);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
</head>
<body style="background-color:#ffffff;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Oxygen-Sans,Ubuntu,Cantarell,'Helvetica Neue',sans-serif">
    <div style="display:none;overflow:hidden;max-height:0">New Contact Form Submission from {name}</div>
    <div style="margin:0 auto;padding:20px 0 48px;max-width:580px">
        <h1 style="font-size:24px;font-weight:600;line-height:1.3;margin:0 0 24px">New Contact Form Submission</h1>
        <p style="font-size:16px;line-height:1.5;margin:0 0 16px;color:#484848">You have received a new message from your website contact form.</p>
        <div style="padding:24px;background-color:#f6f6f6;border-radius:12px;margin:24px 0">
            <p style="font-size:14px;font-weight:600;color:#666666;margin:8px 0 4px">From:</p>
            <p style="font-size:16px;color:#484848;margin:0 0 16px">{name}</p>
            <p style="font-size:14px;font-weight:600;color:#666666;margin:8px 0 4px">Email:</p>
            <p style="font-size:16px;color:#484848;margin:0 0 16px">{email}</p>
            <p style="font-size:14px;font-weight:600;color:#666666;margin:8px 0 4px">Subject:</p>
            <p style="font-size:16px;color:#484848;margin:0 0 16px">{subject}</p>
            <hr style="border-color:#e6e6e6;margin:20px 0">
            <p style="font-size:14px;font-weight:600;color:#666666;margin:8px 0 4px">Message:</p>
            <p style="font-size:16px;color:#484848;margin:0 0 16px;white-space:pre-wrap">{message}</p>
        </div>
        <hr style="border-color:#e6e6e6;margin:20px 0">
        <p style="font-size:13px;color:#888888;margin:24px 0 0;text-align:center">This email was sent from your website contact form at {site_name}.</p>
    </div>
</body>
</html>"#
        )
    }

    pub fn text(&self) -> String {
        let ContactSubmission {
            name,
            email,
            subject,
            message,
        } = self.submission;
        format!(
            "New Contact Form Submission\n\n\
            You have received a new message from your website contact form.\n\n\
            From: {name}\n\
            Email: {email}\n\
            Subject: {subject}\n\n\
            Message:\n{message}\n\n\
            This email was sent from your website contact form at {}.\n",
            self.site_name
        )
    }
}
