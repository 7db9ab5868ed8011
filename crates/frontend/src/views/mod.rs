pub mod direccion_general;
pub mod gestion_promociones;
pub mod stock_productos;
pub mod torre_control;
pub mod vista_cliente;
