mod contact_form;
mod health_check;
mod startup;
