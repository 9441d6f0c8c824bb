//! Email text for teacher and guardian notices

use exitpass_domain::constants::GUARDIAN_SENDER_NAME;
use exitpass_domain::{
    ExitEvent, NotificationConfig, NotificationPlan, OutgoingMessage, TeacherNotice,
};

/// Renders outgoing messages from a plan and the sender settings.
#[derive(Debug, Clone)]
pub struct NoticeTemplates {
    config: NotificationConfig,
}

impl NoticeTemplates {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    /// Message for one teacher in the plan.
    pub fn teacher_message(&self, notice: &TeacherNotice, event: &ExitEvent) -> OutgoingMessage {
        let body = format!(
            "\nEstimado/a {teacher},\n\n\
             Le informamos que el alumno/a {student} del grupo {group} ha registrado una salida \
             del centro en este momento.\n\n\
             Motivo: {motive}\n\
             Hora de registro: {time}\n\n\
             Este es un mensaje automático generado por el sistema de Partes de Salida.\n",
            teacher = notice.teacher_name,
            student = event.student_name,
            group = event.group,
            motive = event.motive,
            time = event.timestamp.format("%H:%M"),
        );

        OutgoingMessage {
            from: mailbox(&self.config.sender_name, &self.config.sender_email),
            to: vec![notice.email.clone()],
            reply_to: self.config.reply_to.clone(),
            subject: format!(
                "Aviso de salida de alumno: {} ({})",
                event.student_name, event.group
            ),
            body,
        }
    }

    /// Summary for the on-duty guardians, or `None` when none are configured.
    pub fn guardian_message(&self, event: &ExitEvent) -> Option<OutgoingMessage> {
        let to = self.config.valid_guardian_emails();
        if to.is_empty() {
            return None;
        }

        let returns = if event.returns {
            format!("SÍ (Horas: {})", event.return_hours_display())
        } else {
            "NO".to_string()
        };

        let body = format!(
            "\nSe ha registrado una nueva salida de alumno:\n\n\
             Alumno: {student}\n\
             Grupo: {group}\n\
             Motivo: {motive}\n\
             ¿Regresa?: {returns}\n\
             Hora: {time}\n\n\
             Este correo se envía automáticamente a los profesores de guardia configurados.\n",
            student = event.student_name,
            group = event.group,
            motive = event.motive,
            time = event.timestamp.format("%H:%M"),
        );

        Some(OutgoingMessage {
            from: mailbox(GUARDIAN_SENDER_NAME, &self.config.sender_email),
            to,
            reply_to: None,
            subject: format!(
                "AVISO GUARDIA: Salida de alumno - {} ({})",
                event.student_name, event.group
            ),
            body,
        })
    }

    /// Guardian summary first, then one message per teacher.
    pub fn render_all(&self, event: &ExitEvent, plan: &NotificationPlan) -> Vec<OutgoingMessage> {
        self.guardian_message(event)
            .into_iter()
            .chain(plan.notices.iter().map(|notice| self.teacher_message(notice, event)))
            .collect()
    }
}

fn mailbox(name: &str, address: &str) -> String {
    if name.is_empty() {
        address.to_string()
    } else {
        format!("{name} <{address}>")
    }
}
