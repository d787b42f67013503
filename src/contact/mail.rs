//! Notification and confirmation emails for a contact submission.

use serde::{Deserialize, Serialize};

use super::ContactForm;
use crate::config::section::Credentials;
use crate::utils::html::{escape, escape_attr, escape_multiline};

/// A rendered email, ready for a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Email to the site owner, replying goes straight to the visitor.
pub fn notification(form: &ContactForm, creds: &Credentials) -> Email {
    let name = escape(&form.name);
    let email = escape(&form.email);
    let subject = escape(&form.subject);
    let message = escape_multiline(&form.message);
    let mailto = escape_attr(&form.email);

    Email {
        from: creds.sender.clone(),
        to: creds.recipient.clone(),
        reply_to: Some(form.email.clone()),
        subject: format!("Portfolio Contact: {}", form.subject),
        html: format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #4f46e5;">New Contact Form Submission</h2>
  <div style="background: #f9fafb; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Subject:</strong> {subject}</p>
  </div>
  <div style="padding: 20px; border: 1px solid #e5e7eb; border-radius: 8px;">
    <h3 style="margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6;">{message}</p>
  </div>
  <p style="font-size: 14px;">Reply to: <a href="mailto:{mailto}">{email}</a></p>
</div>
"#
        ),
    }
}

/// Receipt sent back to the visitor.
pub fn confirmation(form: &ContactForm, creds: &Credentials, signature: &str) -> Email {
    let name = escape(&form.name);
    let subject = escape(&form.subject);
    let message = escape_multiline(&form.message);
    let owner = escape(&creds.recipient);
    let signature = escape(signature);

    Email {
        from: creds.sender.clone(),
        to: form.email.clone(),
        reply_to: None,
        subject: format!("Thank you for contacting me - {}", form.subject),
        html: format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #4f46e5;">Thank You for Your Message!</h2>
  <p>Hi {name},</p>
  <p>Thank you for reaching out through my portfolio website. I've received your message and will get back to you as soon as possible.</p>
  <div style="background: #f9fafb; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Your Message:</h3>
    <p><strong>Subject:</strong> {subject}</p>
    <p style="line-height: 1.6;">{message}</p>
  </div>
  <p>I typically respond within 24-48 hours. If you need to reach me urgently, you can also email me directly at {owner}.</p>
  <p>Best regards,<br>{signature}</p>
  <p style="font-size: 14px;">This is an automated confirmation email from my portfolio contact form.</p>
</div>
"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            sender: "mailer@jane.dev".into(),
            recipient: "jane@jane.dev".into(),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Sam <b>".into(),
            email: "sam@example.com".into(),
            subject: "Hiring".into(),
            message: "Line one\nLine <two>".into(),
        }
    }

    #[test]
    fn test_notification() {
        let mail = notification(&form(), &creds());
        assert_eq!(mail.to, "jane@jane.dev");
        assert_eq!(mail.from, "mailer@jane.dev");
        assert_eq!(mail.reply_to.as_deref(), Some("sam@example.com"));
        assert_eq!(mail.subject, "Portfolio Contact: Hiring");
        assert!(mail.html.contains("Sam &lt;b&gt;"));
        assert!(mail.html.contains("Line one<br>Line &lt;two&gt;"));
        assert!(!mail.html.contains("<two>"));
    }

    #[test]
    fn test_confirmation() {
        let mail = confirmation(&form(), &creds(), "Jane Doe");
        assert_eq!(mail.to, "sam@example.com");
        assert!(mail.reply_to.is_none());
        assert_eq!(mail.subject, "Thank you for contacting me - Hiring");
        assert!(mail.html.contains("Best regards,<br>Jane Doe"));
        assert!(mail.html.contains("directly at jane@jane.dev"));
    }
}
